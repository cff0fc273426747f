mod commands;
mod terminal;

use commands::{CommandLine, Commands, classify, generate, history, prompts, year};
use sacristan_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;
    print::banner(commands.no_banner, commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        ..Config::default()
    };
    let data_dir = commands.data_dir();

    let result = match commands.command {
        Commands::Classify { date } => {
            print::header("liturgical calendar", cfg.quiet);
            classify::classify(date, &cfg)
        }
        Commands::Year { year } => {
            print::header(&format!("liturgical year {year}"), cfg.quiet);
            year::year(year, &cfg)
        }
        Commands::Prompts { target } => {
            print::header("building prompts", cfg.quiet);
            prompts::prompts(&target, &data_dir?, &cfg)
        }
        Commands::Generate {
            target,
            generator,
            best_effort,
            attempts,
            output,
        } => {
            print::header("getting ready to draft", cfg.quiet);
            let cfg = Config {
                max_attempts: attempts.max(1),
                ..cfg
            };
            let request = generate::Request {
                target,
                generator,
                best_effort,
                output,
                data_dir: data_dir?,
            };
            generate::generate(request, cfg).await
        }
        Commands::History { show } => {
            print::header("recent documents", cfg.quiet);
            history::history(show, &data_dir?, &cfg).await
        }
    };

    if result.is_ok() && cfg.quiet == 0 {
        print::end_of_program();
    }
    result
}
