use anyhow::Context;
use clap::Parser;
use evolv_client::config::cli::{Command, LogFormat, PayloadShape};
use evolv_client::utils::{logger, validation::Validate};
use evolv_client::{
    CliConfig, ClientConfig, NodeClient, PayloadBuilder, SideLaunchInfo, TransactionIntent,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting evolv-client");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    // 合併並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    tracing::debug!(
        "Module {}::{} via {}",
        config.module_address,
        config.module_name,
        config.node_url
    );

    let builder = PayloadBuilder::new(&config);
    match cli.command {
        Command::CreateAggregator {
            name,
            symbol,
            icon_uri,
            project_uri,
            shape,
        } => print_intent(
            &builder.create_aggregator(name, symbol, icon_uri, project_uri),
            shape,
        ),
        Command::CreateSideLaunch {
            aggregator_symbol,
            side_launch_name,
            description,
            metadata_uri,
            shape,
        } => print_intent(
            &builder.create_side_launch(
                aggregator_symbol,
                side_launch_name,
                description,
                metadata_uri,
            ),
            shape,
        ),
        Command::MintTokens {
            aggregator_symbol,
            to_address,
            amount,
            shape,
        } => print_intent(
            &builder.mint_tokens(aggregator_symbol, to_address, amount),
            shape,
        ),
        Command::BurnTokens {
            aggregator_symbol,
            from_address,
            amount,
            shape,
        } => print_intent(
            &builder.burn_tokens(aggregator_symbol, from_address, amount),
            shape,
        ),
        Command::MintNft {
            aggregator_symbol,
            side_launch_name,
            to_address,
            shape,
        } => print_intent(
            &builder.mint_nft(aggregator_symbol, side_launch_name, to_address),
            shape,
        ),
        Command::SideLaunches { json } => list_side_launches(&config, json).await,
    }
}

fn print_intent(intent: &TransactionIntent, shape: PayloadShape) -> anyhow::Result<()> {
    let payload = match shape {
        PayloadShape::Wallet => intent.wallet_payload(),
        PayloadShape::EntryFunction => intent.entry_function_payload(),
    };
    let rendered = serde_json::to_string_pretty(&payload).context("failed to render payload")?;
    println!("{}", rendered);
    Ok(())
}

async fn list_side_launches(config: &ClientConfig, json: bool) -> anyhow::Result<()> {
    let reader = NodeClient::reader(config).context("failed to create node client")?;

    let launches = match reader.fetch_side_launches().await {
        Ok(launches) => launches,
        Err(e) => {
            tracing::error!("❌ Error fetching side launch infos: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if json {
        let rendered =
            serde_json::to_string_pretty(&launches).context("failed to render side launches")?;
        println!("{}", rendered);
        return Ok(());
    }

    if launches.is_empty() {
        println!("No side launches available.");
        return Ok(());
    }

    for launch in &launches {
        print_side_launch(launch);
    }
    Ok(())
}

fn print_side_launch(launch: &SideLaunchInfo) {
    println!("{} [{}]", launch.name, launch.status_label());
    println!("  {}", launch.description);
    println!("  collection: {}", launch.collection_address);
    println!("  metadata:   {}", launch.metadata_uri);
    if !launch.is_complete() {
        let missing: Vec<&str> = launch.missing_fields.iter().map(|f| f.as_str()).collect();
        println!("  ⚠️  missing from node response: {}", missing.join(", "));
    }
}
