//! Templated HTML index page.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use chrono::Datelike;

use crate::config::Config;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// GET / — renders the index page with the resolved environment, app name,
/// title and current year. Never fails; missing config falls back to defaults.
#[tracing::instrument(skip(config))]
pub async fn get(State(config): State<Arc<Config>>) -> Html<String> {
    let env = config.display_env();
    let title = format!("Halloworld - {env}");
    let year = chrono::Utc::now().year();

    Html(render(&title, &config.app_name, &env, year))
}

fn render(title: &str, app_name: &str, env: &str, year: i32) -> String {
    INDEX_TEMPLATE
        .replace("{{title}}", title)
        .replace("{{appName}}", app_name)
        .replace("{{env}}", env)
        .replace("{{year}}", &year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_every_placeholder() {
        let page = render("Halloworld - PROD", "halloworld-service", "PROD", 2026);
        assert!(page.contains("<title>Halloworld - PROD</title>"));
        assert!(page.contains("halloworld-service"));
        assert!(page.contains("PROD"));
        assert!(page.contains("2026"));
        assert!(!page.contains("{{"));
    }
}
