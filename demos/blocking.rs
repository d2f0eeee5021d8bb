use tinder_http::blocking::BlockingTinderClient;

fn main() -> anyhow::Result<()> {
    let client = BlockingTinderClient::from_env()?;

    for profile in client.recommendations()? {
        println!("{} ({})", profile["name"], profile["_id"]);
    }

    Ok(())
}
