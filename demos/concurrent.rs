use tinder_http::{endpoints::DEFAULT_MATCH_COUNT, TinderClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = TinderClient::from_env()?;

    let (profile, meta, matches) = tokio::join!(
        client.profile(),
        client.meta_v2(),
        client.matches(DEFAULT_MATCH_COUNT),
    );

    println!("profile: {}", profile?["name"]);
    println!("meta: {}", meta?);
    for m in matches? {
        println!("match {}", m["_id"]);
    }

    Ok(())
}
