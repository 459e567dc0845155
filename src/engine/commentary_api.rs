use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{CommentaryAPI, VerdictRequest},
    external::gemini,
};

pub const FALLBACK_VERDICT: &str = "AI is offline, but the math says: check the times!";

#[async_trait]
impl CommentaryAPI for Engine {
    #[tracing::instrument(skip(self, request))]
    async fn fairness_verdict(&self, request: &VerdictRequest) -> String {
        let prompt = format!(
            "Two people are meeting at a restaurant called \"{}\" ({}).\n\
             Person A is coming from \"{}\" and it takes them {}.\n\
             Person B is coming from \"{}\" and it takes them {}.\n\n\
             Provide a very short, witty, 1-sentence verdict on the fairness of this commute.\n\
             If it's fair, cheer them on. If it's unfair, gently tease the person with the shorter commute.",
            request.venue_name,
            request.cuisine,
            request.address_a,
            request.travel_time_a,
            request.address_b,
            request.travel_time_b,
        );

        match gemini::generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("commentary generation failed: {:?}", err);
                FALLBACK_VERDICT.into()
            }
        }
    }
}

#[test]
fn verdict_falls_back_without_config() {
    use tokio_test::block_on;

    std::env::remove_var("GEMINI_API_BASE");
    std::env::remove_var("GEMINI_API_KEY");

    let request = VerdictRequest {
        venue_name: "Test Trattoria".into(),
        cuisine: "Italian".into(),
        travel_time_a: "20 mins".into(),
        travel_time_b: "25 mins".into(),
        address_a: "350 5th Ave".into(),
        address_b: "Brooklyn Museum".into(),
    };

    let verdict = block_on(Engine::new().fairness_verdict(&request));

    assert_eq!(verdict, FALLBACK_VERDICT);
}
