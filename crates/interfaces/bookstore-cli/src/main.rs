use bookstore_cli::commands::{self, AddBookInput, BookQuery};
use bookstore_cli::CliSortOrder;
use bookstore_infra::{InMemoryBookService, MockLatency};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Skip the simulated network latency of the in-memory catalog
    #[arg(long, global = true)]
    instant: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog, filtered and sorted by title
    Books {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long)]
        genre: Option<String>,
        #[arg(long, value_enum, default_value_t = CliSortOrder::Asc)]
        order: CliSortOrder,
        #[arg(long, help = "Print the books as JSON")]
        json: bool,
    },
    /// Validate and add a book
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        genre: String,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        published: String,
        #[arg(long)]
        isbn: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        pages: Option<f64>,
        #[arg(long)]
        cover_url: Option<String>,
    },
    /// Delete a book by id
    Delete { id: String },
    #[command(name = "check-isbn")]
    CheckIsbn { value: String },
    #[command(name = "password-strength")]
    PasswordStrength { value: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("default subscriber");

    let service = || {
        let svc = InMemoryBookService::new();
        if cli.instant {
            svc.with_latency(MockLatency::none())
        } else {
            svc
        }
    };

    match cli.command {
        Commands::Books {
            search,
            genre,
            order,
            json,
        } => {
            let books = commands::cmd_books(
                service(),
                BookQuery {
                    search,
                    genre,
                    order: order.into(),
                },
            )
            .await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&books)?);
            } else {
                println!("{}", commands::render_books(&books));
            }
        }
        Commands::Add {
            title,
            author,
            genre,
            price,
            published,
            isbn,
            description,
            pages,
            cover_url,
        } => {
            let input = AddBookInput {
                title,
                author,
                genre,
                price,
                published,
                isbn,
                description,
                pages,
                cover_url,
            };
            let book = commands::cmd_add(service(), input).await?;
            println!(":: Added book");
            println!("{}", commands::render_books(std::slice::from_ref(&book)));
        }
        Commands::Delete { id } => {
            let remaining = commands::cmd_delete(service(), id.clone()).await?;
            println!(":: Deleted book {id}; {} remaining", remaining.len());
        }
        Commands::CheckIsbn { value } => match commands::check_isbn(&value) {
            None => println!("{value}: valid ISBN"),
            Some(message) => {
                println!("{value}: {message}");
                std::process::exit(1);
            }
        },
        Commands::PasswordStrength { value } => {
            let strength = commands::password_strength(&value);
            println!(
                "Strength: {} ({}%, {})",
                strength.label().as_str(),
                strength.score,
                strength.color().as_str()
            );
        }
    }

    Ok(())
}
