use tinder_http::{Location, TinderClient, TinderError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let token = std::env::var("TINDER_AUTH_TOKEN")?;
    let client = TinderClient::new(token)?;

    client.set_location(Location::new(40.7128, -74.0060)).await?;

    for profile in client.recommendations_v2().await? {
        let Some(id) = profile["_id"].as_str() else {
            continue;
        };
        match client.like(id).await {
            Ok(result) if result["match"] == true => println!("matched with {id}"),
            Ok(_) => println!("liked {id}"),
            // Out of likes or a bad profile id; skip the rest of the batch.
            Err(err @ TinderError::Http { .. }) => {
                eprintln!("stopping: {err}");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    client.reset_location().await?;
    Ok(())
}
