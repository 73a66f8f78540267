//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// A service card linking to one of the catalog pages.
#[derive(Clone)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    pub href: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub services: Vec<ServiceCard>,
}

/// The three service cards shown under the hero.
fn service_cards() -> Vec<ServiceCard> {
    vec![
        ServiceCard {
            title: "Vendita".to_string(),
            description: "Ampia selezione di barche nuove e moto d'acqua delle migliori marche."
                .to_string(),
            href: "/vendita".to_string(),
        },
        ServiceCard {
            title: "Noleggio".to_string(),
            description:
                "Noleggia la tua barca ideale per una giornata o una vacanza indimenticabile."
                    .to_string(),
            href: "/noleggio".to_string(),
        },
        ServiceCard {
            title: "Ricambi".to_string(),
            description: "Ricambi originali e di qualità per la tua imbarcazione.".to_string(),
            href: "/ricambi".to_string(),
        },
    ]
}

/// Display the home page.
#[instrument(skip(_state))]
pub async fn home(State(_state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        services: service_cards(),
    }
}
