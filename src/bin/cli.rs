//! cfp-admin, the command-line driver for the CFP admin core

use cfp_core::{
	admin::{talks, users},
	auth::StaticGate,
	config::default_data_dir,
	CfpCore,
};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cfp-admin", about = "Review submitted conference talks", version)]
struct Cli {
	/// Data directory (config + database)
	#[arg(long, env = "CFP_DATA_DIR")]
	data_dir: Option<PathBuf>,

	/// Admin user id to act as
	#[arg(long, env = "CFP_ADMIN_ID", default_value_t = 1)]
	admin_id: i32,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// List submitted talks
	List {
		#[arg(long, default_value_t = 1)]
		page: u64,
	},
	/// Show a talk with its speaker and the speaker's other talks
	View { id: i32 },
	/// Favorite a talk (or remove the favorite)
	Favorite {
		id: i32,
		#[arg(long)]
		remove: bool,
	},
	/// Select a talk for the program (or deselect it)
	Select {
		id: i32,
		#[arg(long)]
		remove: bool,
	},
	/// Delete a speaker and all their dependent records
	DeleteUser { id: i32 },
	/// Search speakers by name
	Search { term: Option<String> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let cli = Cli::parse();
	let data_dir = match cli.data_dir {
		Some(dir) => dir,
		None => default_data_dir()?,
	};

	let core = CfpCore::open(data_dir).await?;
	let gate = StaticGate::admin(cli.admin_id);
	let per_page = core.config().talks_per_page;

	match cli.command {
		Command::List { page } => {
			let listing = talks::list_talks(core.db(), &gate, page, per_page).await?;

			let mut table = Table::new();
			table.set_header(vec![
				"Id", "Title", "Speaker", "Category", "Level", "Selected", "Favs", "Mine",
			]);
			for talk in &listing.items {
				table.add_row(vec![
					talk.id.to_string(),
					talk.title.clone(),
					talk.speaker_name.clone(),
					talk.category.clone(),
					talk.level.clone(),
					if talk.selected { "yes" } else { "" }.to_string(),
					talk.favorite_count.to_string(),
					if talk.favorited { "*" } else { "" }.to_string(),
				]);
			}
			println!("{table}");
			println!(
				"Page {}/{} ({} talks)",
				listing.page, listing.total_pages, listing.total_items
			);
		}
		Command::View { id } => {
			let detail = talks::view_talk(core.db(), &gate, id).await?;
			println!("{} by {}", detail.talk.title, detail.speaker.name);
			println!(
				"{} / {} {}",
				detail.talk.category,
				detail.talk.level,
				if detail.talk.selected { "[selected]" } else { "" }
			);
			println!("\n{}\n", detail.talk.description);
			if let Some(company) = &detail.speaker.company {
				println!("Company: {company}");
			}
			if !detail.other_talks.is_empty() {
				println!("Other talks by this speaker:");
				for other in &detail.other_talks {
					println!("  #{} {}", other.id, other.title);
				}
			}
		}
		Command::Favorite { id, remove } => {
			talks::set_favorite(core.db(), &gate, id, !remove).await?;
			println!(
				"Talk {} {}",
				id,
				if remove { "unfavorited" } else { "favorited" }
			);
		}
		Command::Select { id, remove } => {
			talks::set_select(core.db(), &gate, id, !remove).await?;
			println!(
				"Talk {} {}",
				id,
				if remove { "deselected" } else { "selected" }
			);
		}
		Command::DeleteUser { id } => {
			users::delete_user(core.db(), id).await?;
			println!("User {id} deleted");
		}
		Command::Search { term } => {
			let found = users::search_users(
				core.db(),
				&gate,
				term.as_deref(),
				users::UserOrder::default(),
			)
			.await?;
			for user in &found {
				println!("#{} {} <{}>", user.id, user.full_name(), user.email);
			}
			println!("{} users", found.len());
		}
	}

	Ok(())
}
