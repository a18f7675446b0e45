use axum::{extract::State, Json};

use crate::handlers::AppState;
use crate::pricing::CatalogView;

/// Handle /v1/catalog: pricing tables offered by the current profile
pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogView> {
    Json(state.estimator().catalog())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pricing::Profile;

    #[tokio::test]
    async fn test_catalog_uses_loaded_profile() {
        let config = Config {
            profile: Profile::enterprise_only(),
            ..Config::default()
        };
        let state = AppState::new(config);

        let Json(catalog) = get_catalog(State(state)).await;
        assert_eq!(catalog.fivetran_tiers.len(), 2);
    }
}
