//! Command-line definitions. Dispatch happens over this closed enum in
//! `commands::run`; running with no subcommand launches the interactive
//! carousel UI.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "banner-manager",
    version,
    about = "Store, browse, edit, and export terminal banners"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Add one or more banners", alias = "a")]
    Add {
        #[arg(
            required = true,
            help = "Literal text, file path(s), or URL(s) to add as banner(s)"
        )]
        source: Vec<String>,

        #[arg(long, help = "Render the resolved text as FIGlet ASCII art")]
        ascii: bool,

        #[arg(
            long,
            default_value = "random",
            help = "FIGlet font name, or 'random' to pick one per banner"
        )]
        font: String,

        #[arg(long, help = "Print the generated text without persisting it")]
        dry_run: bool,
    },

    #[command(about = "Delete a banner by ID (asks for confirmation)")]
    Delete {
        #[arg(help = "Banner ID")]
        id: i64,
    },

    #[command(about = "Show a banner by ID, or a random one")]
    Show {
        #[arg(help = "Banner ID, or 'random'")]
        target: String,

        #[arg(long, help = "Print the original content, ignoring any markup override")]
        content_only: bool,
    },

    #[command(about = "Edit a banner's markup in an external editor")]
    Update {
        #[arg(help = "Banner ID")]
        id: i64,

        #[arg(long, help = "Editor command (defaults to $EDITOR, then vim)")]
        editor: Option<String>,
    },

    #[command(about = "Reset a banner's markup back to its original content")]
    Reset {
        #[arg(help = "Banner ID")]
        id: i64,
    },

    #[command(about = "Search banners by keyword")]
    Search {
        #[arg(help = "Keyword to match against banner content")]
        keyword: String,
    },

    #[command(about = "List banners a page at a time")]
    List {
        #[arg(long, default_value = "0", help = "Page number")]
        page: u32,

        #[arg(
            long = "page_size",
            default_value = "10",
            help = "Number of banners per page"
        )]
        page_size: u32,
    },

    #[command(about = "Export banners to a single file or one file per banner")]
    Export {
        #[arg(long, help = "Export all banners to one file")]
        single_file: bool,

        #[arg(long, help = "Separator between banners in single-file mode (default: '\\n---\\n')")]
        separator: Option<String>,

        #[arg(long, help = "Base name for per-banner files (default: 'banner')")]
        base_name: Option<String>,

        #[arg(long, help = "Extension for per-banner files (default: 'txt')")]
        extension: Option<String>,

        #[arg(help = "Output path for single-file mode")]
        file_path: Option<String>,
    },

    #[command(about = "Delete every banner (asks for confirmation)")]
    Clear,
}
