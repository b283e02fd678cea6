use artificial::ArtificialClient;
use artificial::predibase::PredibaseAdapterBuilder;
use tracing_subscriber::EnvFilter;

/// # One prompt, one completion
///
/// 1. **Builds** a Predibase backend from the environment.
/// 2. **Attaches** a fine-tuned adapter if `PREDIBASE_ADAPTER` is set.
/// 3. **Prints** the completion, cut at the first blank line.
///
/// ## How to run
///
/// ```bash
/// export PREDIBASE_API_TOKEN=pb_…
/// export PREDIBASE_MODEL=mistral-7b           # or pb://deployments/mistral-7b
/// export PREDIBASE_ADAPTER=support-bot/3      # optional
/// RUST_LOG=artificial_predibase=debug \
///   cargo run -p artificial --features tracing --example predibase_generate
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let model = std::env::var("PREDIBASE_MODEL").unwrap_or_else(|_| "mistral-7b".into());

    let mut builder = PredibaseAdapterBuilder::new_from_env()
        .with_model(model)
        .with_extra_parameter("example", "predibase_generate");
    if let Ok(adapter) = std::env::var("PREDIBASE_ADAPTER") {
        builder = builder.with_adapter(adapter);
    }

    let client = ArtificialClient::new(builder.build()?);

    let answer = client
        .generate(
            "Write a two sentence product description for a solar lantern.",
            Some(vec!["\n\n".into()]),
        )
        .await?;

    println!("{answer}");

    Ok(())
}
