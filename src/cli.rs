use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chat with your English Literature professor", long_about = None)]
pub struct Args {
    /// Ask a single question and exit instead of starting a chat
    pub query: Option<String>,

    /// Course to discuss: a course name or its number in the course list
    #[arg(short, long)]
    pub course: Option<String>,

    /// Base URL of the professor backend (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Log request details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_shot_query_with_course() {
        let args = Args::parse_from(["verse", "--course", "3", "Who is Satan?"]);
        assert_eq!(args.query.as_deref(), Some("Who is Satan?"));
        assert_eq!(args.course.as_deref(), Some("3"));
        assert!(!args.verbose);
    }

    #[test]
    fn no_query_means_chat() {
        let args = Args::parse_from(["verse", "-v", "--base-url", "http://localhost:8000/rag"]);
        assert_eq!(args.query, None);
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:8000/rag"));
        assert!(args.verbose);
    }
}
