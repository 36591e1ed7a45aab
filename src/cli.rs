use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use log::{info, warn};

use crate::clients::errors::Result;
use crate::discoverer::{Discoverer, DiscovererBuilder};
use crate::genre::{GenreChoice, GenreSelection};
use crate::render::{Outcome, failure_message};

const TITLE: &str = "Genre-Based Emerging Artist Discoverer";
const INTRO: &str = "Select a music genre to discover up-and-coming artists and their new tracks! This uses Azure OpenAI to suggest new talent.";

#[derive(Parser)]
#[command(name = "genre-scout")]
#[command(version, about = "Discover emerging artists in a music genre", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick genres interactively, one discovery per pick (default)
    Form,
    /// Run a single discovery and print the results
    Discover {
        /// One of the listed genres, or Other
        #[arg(short, long)]
        genre: GenreChoice,
        /// Free-text genre used when --genre is Other
        #[arg(short, long)]
        custom: Option<String>,
    },
    /// List the genres on offer
    Genres,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Form) {
        Commands::Genres => {
            for label in GenreChoice::labels() {
                println!("{label}");
            }
            Ok(())
        }
        Commands::Discover { genre, custom } => {
            let selection = GenreSelection::resolve(genre, custom.as_deref())?;
            let discoverer = DiscovererBuilder::new().build()?;
            discover_once(&discoverer, &selection).await
        }
        Commands::Form => {
            info!("Building discoverer ...");
            let discoverer = DiscovererBuilder::new().build()?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_form(&discoverer, &mut stdin.lock(), &mut stdout).await
        }
    }
}

async fn discover_once(discoverer: &Discoverer, selection: &GenreSelection) -> Result<()> {
    match discoverer.discover(selection).await {
        Ok(recommendations) => {
            print!("{}", Outcome::from_result(Ok(recommendations)));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            Err(e)
        }
    }
}

/// Terminal version of the genre form. Failed attempts are reported and the
/// loop carries on; it ends when the user declines another round or input
/// runs out.
pub async fn run_form<R, W>(discoverer: &Discoverer, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{TITLE}")?;
    writeln!(output, "{INTRO}")?;

    loop {
        let Some(choice) = read_choice(input, output)? else {
            break;
        };

        let custom = if choice == GenreChoice::Other {
            match read_line(input, output, "Enter Custom Genre: ")? {
                Some(text) => Some(text),
                None => break,
            }
        } else {
            None
        };

        let selection = match GenreSelection::resolve(choice, custom.as_deref()) {
            Ok(selection) => selection,
            Err(e) => {
                warn!("Skipping discovery: {e}");
                writeln!(output, "Please enter a genre first.")?;
                continue;
            }
        };

        writeln!(output, "Generating recommendations...")?;
        let outcome = Outcome::from_result(discoverer.discover(&selection).await);
        writeln!(output)?;
        write!(output, "{outcome}")?;

        match read_line(input, output, "\nDiscover more? (y/N) ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {}
            _ => break,
        }
    }

    writeln!(output, "---")?;
    writeln!(output, "Built with Azure OpenAI. Prototype for portfolio.")?;
    Ok(())
}

fn read_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<GenreChoice>> {
    loop {
        writeln!(output)?;
        writeln!(output, "Select Genre:")?;
        for (n, choice) in GenreChoice::ALL.iter().enumerate() {
            writeln!(output, "  {}) {choice}", n + 1)?;
        }
        let Some(answer) = read_line(input, output, "> ")? else {
            return Ok(None);
        };

        if let Some(choice) = parse_choice(&answer) {
            return Ok(Some(choice));
        }
        writeln!(
            output,
            "Please pick 1-{} or a genre name.",
            GenreChoice::ALL.len()
        )?;
    }
}

fn parse_choice(answer: &str) -> Option<GenreChoice> {
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| GenreChoice::ALL.get(i).copied());
    }
    answer.parse().ok()
}

// None on end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
