// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! The protected recommendations endpoint.
//!
//! The frontend calls `GET /api/recommendations/{user_id}` and scans the
//! response for a numeric calories figure, so `caloriesBurned` must stay a
//! plain number.

use std::hash::{DefaultHasher, Hash, Hasher};

use axum::{extract::Path, Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::Identity;

/// Calorie-burn prediction for one user.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Unique id of this prediction
    pub prediction_id: Uuid,
    /// User the prediction was computed for
    pub user_id: String,
    /// Predicted calories burned
    pub calories_burned: f64,
    /// When the prediction was generated
    pub generated_at: DateTime<Utc>,
}

/// Recommendation endpoint handler.
///
/// Requires authentication by policy; the gate guarantees an [`Identity`] is
/// present before this runs.
#[utoipa::path(
    get,
    path = "/api/recommendations/{user_id}",
    tag = "Recommendations",
    params(
        ("user_id" = String, Path, description = "User to compute the prediction for")
    ),
    responses(
        (status = 200, description = "Calorie-burn prediction", body = Recommendation),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_recommendation(
    Path(user_id): Path<String>,
    Extension(identity): Extension<Identity>,
) -> Json<Recommendation> {
    tracing::debug!(
        subject = identity.subject(),
        user_id = %user_id,
        "serving calorie-burn prediction"
    );

    let calories_burned = predict_calories_burned(&user_id);

    Json(Recommendation {
        prediction_id: Uuid::new_v4(),
        user_id,
        calories_burned,
        generated_at: Utc::now(),
    })
}

/// Deterministic stand-in for the prediction model service.
fn predict_calories_burned(user_id: &str) -> f64 {
    let mut hasher = DefaultHasher::new();
    user_id.hash(&mut hasher);
    250.0 + (hasher.finish() % 1500) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_is_deterministic_per_user() {
        assert_eq!(
            predict_calories_burned("42"),
            predict_calories_burned("42")
        );
    }

    #[test]
    fn prediction_stays_in_a_plausible_range() {
        for user_id in ["1", "42", "user-7", ""] {
            let calories = predict_calories_burned(user_id);
            assert!((250.0..1750.0).contains(&calories));
        }
    }

    #[tokio::test]
    async fn response_echoes_the_requested_user() {
        let Json(recommendation) = get_recommendation(
            Path("42".to_string()),
            Extension(Identity::user("user-7")),
        )
        .await;
        assert_eq!(recommendation.user_id, "42");
    }
}
