use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(about = "Validate and inspect ltree label paths", version)]
pub struct Arguments {
    #[clap(subcommand)]
    pub operation: Operation,
    #[clap(long, help = "Set a log prefix", env = "LTREE_LOG_PREFIX")]
    pub log_prefix: Option<String>,
    #[clap(long, help = "Show debug logs", env = "LTREE_DEBUG")]
    pub debug: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum Operation {
    #[clap(about = "Validate paths and print them")]
    Validate {
        #[clap(required = true)]
        paths: Vec<String>,
    },
    #[clap(about = "Print a parent path")]
    Parent { path: String },
    #[clap(about = "Append a label to a path")]
    Append { path: String, label: String },
    #[clap(about = "Check if a path is an ancestor of another")]
    Ancestor { ancestor: String, descendant: String },
    #[clap(about = "Print labels of a path")]
    Labels { path: String },
    #[clap(about = "Sort and deduplicate paths")]
    Sort { paths: Vec<String> },
    #[clap(about = "Print the longest common ancestor of two paths")]
    Common { one: String, other: String },
}
