use serde_json::json;

use crate::util::client;

/// Probe a running bot service. Exit codes: 0 healthy, 1 unhealthy,
/// 3 connection error.
pub async fn run(api_url: &str) -> i32 {
    let response = match client().get(format!("{api_url}/health")).send().await {
        Ok(response) => response,
        Err(err) => {
            eprintln!("connection error: {err}");
            eprintln!("Is the bot service running? Check SCOUT_API_URL.");
            return 3;
        }
    };

    let status = response.status().as_u16();
    let body: serde_json::Value = response
        .json()
        .await
        .unwrap_or_else(|_| json!({"error": "non-json response"}));
    println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());

    if (200..300).contains(&status) { 0 } else { 1 }
}
