use scout_core::PlayerSummary;

use crate::util::client;

/// Fetch a profile straight from the upstream API and print the
/// rendered summary. Exit codes: 0 success, 1 lookup error,
/// 3 connection error.
pub async fn run(api_base: &str, uid: &str, server: &str) -> i32 {
    let response = match client()
        .get(api_base)
        .query(&[("server", server), ("uid", uid)])
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            eprintln!("connection error: {err}");
            return 3;
        }
    };

    let status = response.status().as_u16();
    if status != 200 {
        let body = response.text().await.unwrap_or_default();
        eprintln!("[HTTP {status}] {body}");
        return 1;
    }

    match response.json::<serde_json::Value>().await {
        Ok(document) => {
            println!("{}", PlayerSummary::build(&document).render());
            0
        }
        Err(_) => {
            eprintln!("Invalid JSON from upstream API.");
            1
        }
    }
}
