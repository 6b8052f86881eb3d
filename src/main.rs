use clap::Parser;
use hero_service::config::Command;
use hero_service::utils::{logger, validation::Validate};
use hero_service::{CliConfig, Hero, HeroService, HttpTransport, NewHero, TracingNotifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let service = HeroService::new(
        HttpTransport::new(),
        TracingNotifier,
        config.base_url.clone(),
    );

    match config.command {
        Command::List => {
            for hero in service.get_heroes().await {
                println!("{:>5}  {}", hero.id, hero.name);
            }
        }
        Command::Get { id } => match service.get_hero(id).await {
            Some(hero) => println!("{:>5}  {}", hero.id, hero.name),
            None => println!("no hero with id={}", id),
        },
        Command::Add { name } => match service.add_hero(NewHero { name }).await {
            Some(hero) => println!("✅ created hero id={}", hero.id),
            None => println!("❌ create failed"),
        },
        Command::Update { id, name } => match service.update_hero(&Hero { id, name }).await {
            Some(_) => println!("✅ updated hero id={}", id),
            None => println!("❌ update failed"),
        },
        Command::Delete { id } => match service.delete_hero(id).await {
            Some(_) => println!("✅ deleted hero id={}", id),
            None => println!("❌ delete failed"),
        },
        Command::Search { term } => {
            for hero in service.search_heroes(&term).await {
                println!("{:>5}  {}", hero.id, hero.name);
            }
        }
    }

    Ok(())
}
