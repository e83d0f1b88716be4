use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a single travel question and print the answer
    Ask {
        question: String,
    },

    /// Start the web front end
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
