use std::time::Duration;

use settled::{settle, Error, Outcome, SettleExt as _};

struct Res {
    res: u32,
}

#[derive(serde::Deserialize)]
struct Profile {
    id: u32,
    name: String,
}

async fn fetch_profile() -> Result<Profile, Box<dyn std::error::Error + Send + Sync>> {
    tokio::time::sleep(Duration::from_millis(100)).await;
    Ok(serde_yaml::from_str("id: 123\nname: Test")?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    // an operation that has already produced a value
    let (err, data) = settle(async { Ok::<_, Error>(Res { res: 1 }) })
        .await
        .into_tuple();
    match (err, data) {
        (Some(err), _) => println!("Error: {err}"),
        (None, Some(Res { res })) => println!("Success! Result: {{ res: {res} }}"),
        (None, None) => unreachable!("an outcome always fills one slot"),
    }

    // an operation that fails
    let (err, data) = settle(async { Err::<(), _>(Error::new("Something went wrong")) })
        .await
        .into_tuple();
    match err {
        Some(err) => println!("Expected error: {err}"),
        None => println!("Data: {data:?}"),
    }

    // real I/O, failing with a std error
    match tokio::fs::read_to_string("settled-demo-missing.txt")
        .settle()
        .await
    {
        Outcome::Failure(err) => {
            let kind = err.downcast_ref::<std::io::Error>().map(|io| io.kind());
            println!("I/O error: {err} ({kind:?})")
        }
        Outcome::Success(contents) => println!("Read {} bytes", contents.len()),
    }

    // an async fn that takes a while
    let outcome = fetch_profile().settle().await;
    if let Some(err) = outcome.error() {
        log::warn!("cannot fetch profile: {err}");
    }
    if let Outcome::Success(Profile { id, name }) = outcome {
        println!("Fetched data: {id} {name}");
    }
}
