//! Markdown renderer module
//!
//! Renders a repository as Markdown: header, summary table and commit list.

use crate::config::Config;
use crate::models::{Commit, Model, Repository, User};
use crate::timefmt::format_timestamp;

const SHORT_ID_LEN: usize = 8;

/// Markdown renderer for repositories
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render a complete repository to Markdown
    pub fn render(&self, repository: &Repository) -> String {
        let mut output = String::new();

        output.push_str(&self.render_header(repository));
        output.push_str("\n\n");

        output.push_str(&self.render_summary(repository));
        output.push_str("\n\n");

        if !repository.commits.is_empty() {
            output.push_str(&self.render_commits(&repository.commits));
            output.push_str("\n\n");
        }

        output.trim_end().to_string()
    }

    fn render_header(&self, repository: &Repository) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "# Repository: {}\n\n",
            repository.name.as_deref().unwrap_or("(unnamed)")
        ));
        if let Some(url) = &repository.url {
            output.push_str(&format!("**URL:** {}  \n", url));
        }
        let owner = repository
            .owner
            .as_ref()
            .map(describe_user)
            .unwrap_or_else(|| "none".to_string());
        output.push_str(&format!("**Owner:** {}", owner));

        output
    }

    /// Render summary statistics table
    fn render_summary(&self, repository: &Repository) -> String {
        let mut output = String::new();

        output.push_str("## Summary\n\n");
        output.push_str("| Category | Count |\n");
        output.push_str("|----------|-------|\n");
        output.push_str(&format!("| Commits | {} |\n", repository.commits.len()));
        output.push_str(&format!(
            "| Contributors | {} |",
            repository.contributors().len()
        ));

        output
    }

    fn render_commits(&self, commits: &[Commit]) -> String {
        let mut output = String::new();

        output.push_str("## Commits\n\n");
        for commit in commits {
            output.push_str(&self.render_commit(commit));
            output.push('\n');
        }

        output
    }

    /// Render a single commit line
    fn render_commit(&self, commit: &Commit) -> String {
        let short_id: String = commit
            .id()
            .map(|id| id.to_string().chars().take(SHORT_ID_LEN).collect())
            .unwrap_or_else(|| "-".to_string());

        let author_info = match (&commit.author, self.config.display.show_authors) {
            (Some(author), true) => format!(" — *{}*", display_name(author)),
            _ => String::new(),
        };

        let when = commit
            .timestamp
            .and_then(|ts| format_timestamp(ts).ok())
            .map(|ts| format!(" ({})", ts))
            .unwrap_or_default();

        format!(
            "- `{}` {}{}{}  ",
            short_id,
            commit.message.as_deref().unwrap_or(""),
            author_info,
            when
        )
    }
}

fn display_name(user: &User) -> String {
    user.name
        .clone()
        .or_else(|| user.email.clone())
        .or_else(|| user.id().map(ToString::to_string))
        .unwrap_or_else(|| "unknown".to_string())
}

fn describe_user(user: &User) -> String {
    match (&user.name, &user.email) {
        (Some(name), Some(email)) => format!("{} <{}>", name, email),
        _ => display_name(user),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timefmt::parse_timestamp;

    fn create_test_config() -> Config {
        Config::default()
    }

    fn ann() -> User {
        User::new(
            Some("u1".into()),
            Some("Ann".to_string()),
            Some("ann@x.com".to_string()),
        )
    }

    fn sample_repository() -> Repository {
        let mut repo = Repository::new(
            Some("r1".into()),
            Some("demo".to_string()),
            Some("https://example.com/demo.git".to_string()),
            Some(ann()),
        );
        repo.add_commit(Commit::new(
            Some("0123456789abcdef".into()),
            Some("Add parser".to_string()),
            Some(parse_timestamp("2024-01-15 10:30:00").unwrap()),
            Some(ann()),
        ));
        repo
    }

    #[test]
    fn test_render_header() {
        let config = create_test_config();
        let renderer = Renderer::new(&config);

        let output = renderer.render(&sample_repository());

        assert!(output.starts_with("# Repository: demo"));
        assert!(output.contains("**URL:** https://example.com/demo.git"));
        assert!(output.contains("**Owner:** Ann <ann@x.com>"));
    }

    #[test]
    fn test_render_summary() {
        let config = create_test_config();
        let renderer = Renderer::new(&config);

        let output = renderer.render_summary(&sample_repository());

        assert!(output.contains("## Summary"));
        assert!(output.contains("| Commits | 1 |"));
        assert!(output.contains("| Contributors | 1 |"));
    }

    #[test]
    fn test_render_commit_with_author() {
        let config = create_test_config();
        let renderer = Renderer::new(&config);

        let repo = sample_repository();
        let output = renderer.render_commit(&repo.commits[0]);

        assert!(output.contains("`01234567` Add parser"));
        assert!(output.contains("— *Ann*"));
        assert!(output.contains("(2024-01-15 10:30:00)"));
    }

    #[test]
    fn test_render_commit_without_author() {
        let mut config = create_test_config();
        config.display.show_authors = false;
        let renderer = Renderer::new(&config);

        let repo = sample_repository();
        let output = renderer.render_commit(&repo.commits[0]);

        assert!(!output.contains("Ann"));
    }

    #[test]
    fn test_render_numeric_ids() {
        let config = create_test_config();
        let renderer = Renderer::new(&config);

        let commit = Commit::new(Some(1234567890123u64.into()), None, None, None);
        assert!(renderer.render_commit(&commit).starts_with("- `12345678`"));

        let owner = User::new(Some(9u64.into()), None, None);
        assert_eq!(describe_user(&owner), "9");
    }

    #[test]
    fn test_render_empty_repository() {
        let config = create_test_config();
        let renderer = Renderer::new(&config);

        let output = renderer.render(&Repository::default());

        assert!(output.contains("# Repository: (unnamed)"));
        assert!(output.contains("**Owner:** none"));
        assert!(!output.contains("## Commits"));
    }
}
