//! Command-line arguments and their conversion into a [`Query`]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use japi_core::config::PaginationConfig;
use japi_core::{Id, JsonApiError, JsonApiResult};
use japi_query::{
    pagination_from_config, CursorBasedPaginationSpec, FilterSpec, OffsetBasedPaginationSpec,
    PaginationSpec, Query, QueryOption, SortSpec,
};

/// japi - compose JSON:API request targets
#[derive(Parser, Debug)]
#[command(name = "japi")]
#[command(author, version, about = "Compose JSON:API request targets", long_about = None)]
pub struct Cli {
    /// API base URL; when set, a full URL is printed (overrides JSONAPI_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a query from flags
    Build(BuildArgs),

    /// Build a query from a JSON descriptor file
    Describe {
        /// Path to the descriptor
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Resource type (first path segment)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub resource_type: String,

    /// Fetch a single resource
    #[arg(long)]
    pub id: Option<Id>,

    /// Filter as `attribute=value` or `class:attribute=value`
    #[arg(short, long = "filter", value_name = "FILTER", value_parser = parse_filter)]
    pub filters: Vec<FilterSpec>,

    /// Relationship path to include
    #[arg(short, long = "include", value_name = "PATH")]
    pub includes: Vec<String>,

    /// Sort field, `-` prefix for descending
    #[arg(short, long = "sort", value_name = "FIELD", allow_hyphen_values = true)]
    pub sorts: Vec<String>,

    /// Raw parameter as `name=value`
    #[arg(short, long = "option", value_name = "PARAM", value_parser = parse_option)]
    pub options: Vec<QueryOption>,

    /// Page number (1-based), using the configured pagination style
    #[arg(long, conflicts_with_all = ["offset", "limit", "cursor"])]
    pub page: Option<u32>,

    /// Page size, using the configured pagination style
    #[arg(long, conflicts_with_all = ["offset", "limit"])]
    pub page_size: Option<u32>,

    /// Offset pagination: items to skip
    #[arg(long, conflicts_with = "cursor")]
    pub offset: Option<u64>,

    /// Offset pagination: items per page
    #[arg(long, conflicts_with = "cursor")]
    pub limit: Option<u32>,

    /// Cursor pagination: cursor returned by the previous page
    #[arg(long)]
    pub cursor: Option<String>,
}

fn split_pair(input: &str) -> Result<(&str, &str), String> {
    input
        .split_once('=')
        .ok_or_else(|| format!("expected `name=value`, got `{}`", input))
}

/// Parse `attribute=value` or `class:attribute=value`
pub fn parse_filter(input: &str) -> Result<FilterSpec, String> {
    let (key, value) = split_pair(input)?;
    Ok(match key.split_once(':') {
        Some((class, attribute)) => FilterSpec::for_class(class, attribute, value),
        None => FilterSpec::new(key, value),
    })
}

pub fn parse_option(input: &str) -> Result<QueryOption, String> {
    let (name, value) = split_pair(input)?;
    Ok(QueryOption::new(name, value))
}

impl BuildArgs {
    /// Pick the pagination strategy the flags ask for, if any
    pub fn pagination(
        &self,
        config: &PaginationConfig,
    ) -> JsonApiResult<Option<Box<dyn PaginationSpec>>> {
        if self.offset.is_some() || self.limit.is_some() {
            let spec = OffsetBasedPaginationSpec::try_new(
                self.offset.unwrap_or(0),
                self.limit.unwrap_or(config.page_size),
            )?
            .with_param_names(&config.offset_param, &config.limit_param);
            return Ok(Some(Box::new(spec)));
        }

        if let Some(cursor) = &self.cursor {
            let mut spec = CursorBasedPaginationSpec::new()
                .with_cursor(cursor)
                .with_param_names(&config.cursor_param, &config.size_param);
            if self.page.is_some_and(|page| page > 1) {
                return Err(JsonApiError::invalid_argument(
                    "page",
                    "cursor pagination has no page numbers",
                ));
            }
            if let Some(size) = self.page_size {
                if size == 0 {
                    return Err(JsonApiError::invalid_argument("page_size", "must be positive"));
                }
                spec = spec.with_size(size);
            }
            return Ok(Some(Box::new(spec)));
        }

        if self.page.is_some() || self.page_size.is_some() {
            let spec = pagination_from_config(config, self.page.unwrap_or(1), self.page_size)?;
            return Ok(Some(spec));
        }

        Ok(None)
    }

    pub fn into_query(self, config: &PaginationConfig) -> JsonApiResult<Query> {
        let pagination = self.pagination(config)?;

        let mut query = Query::try_new(self.resource_type)?;
        if let Some(id) = self.id {
            query.set_id_to_find(id);
        }
        for filter in self.filters {
            query.add_filter(filter);
        }
        for include in self.includes {
            query.add_include(include);
        }
        for option in self.options {
            query.add_option(option);
        }
        for sort in &self.sorts {
            query.add_sort(SortSpec::parse(sort));
        }
        if let Some(spec) = pagination {
            query.set_boxed_pagination_spec(spec);
        }
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use japi_core::config::PaginationStyle;

    fn build(args: &[&str]) -> BuildArgs {
        let cli = Cli::try_parse_from(std::iter::once("japi").chain(args.iter().copied())).unwrap();
        match cli.command {
            Command::Build(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("status=active"), Ok(FilterSpec::new("status", "active")));
        assert_eq!(
            parse_filter("comments:approved=true"),
            Ok(FilterSpec::for_class("comments", "approved", "true"))
        );
        assert_eq!(parse_filter("q=a=b"), Ok(FilterSpec::new("q", "a=b")));
        assert!(parse_filter("status").is_err());
    }

    #[test]
    fn test_dotted_filter_stays_simple() {
        let filter = parse_filter("comments.approved=true").unwrap();
        assert!(!filter.is_class_scoped());
        assert_eq!(filter.parameter_name(), "filter[comments.approved]");
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(
            parse_option("fields[articles]=title,body"),
            Ok(QueryOption::new("fields[articles]", "title,body"))
        );
        assert!(parse_option("nothing").is_err());
    }

    #[test]
    fn test_build_end_to_end() {
        let args = build(&[
            "build", "--type", "articles",
            "--filter", "title=Hello",
            "--include", "author",
            "--sort", "-createdAt",
            "--sort", "id",
            "--page", "2",
            "--page-size", "10",
        ]);
        let query = args.into_query(&PaginationConfig::default()).unwrap();
        assert_eq!(
            query.serialize(),
            "articles?filter%5Btitle%5D=Hello&include=author&page%5Bnumber%5D=2&page%5Bsize%5D=10&sort=-createdAt%2Cid"
        );
    }

    #[test]
    fn test_build_offset_and_cursor() {
        let args = build(&["build", "-t", "people", "--offset", "30", "--limit", "15"]);
        let query = args.into_query(&PaginationConfig::default()).unwrap();
        assert_eq!(query.serialize(), "people?page%5Boffset%5D=30&page%5Blimit%5D=15");

        let args = build(&["build", "-t", "people", "--cursor", "abc", "--page-size", "5"]);
        let query = args.into_query(&PaginationConfig::default()).unwrap();
        assert_eq!(query.serialize(), "people?page%5Bcursor%5D=abc&page%5Bsize%5D=5");
    }

    #[test]
    fn test_build_without_pagination() {
        let args = build(&["build", "-t", "people", "--id", "3"]);
        assert!(args.pagination(&PaginationConfig::default()).unwrap().is_none());
        let query = args.into_query(&PaginationConfig::default()).unwrap();
        assert_eq!(query.serialize(), "people/3");
    }

    #[test]
    fn test_conflicting_pagination_flags() {
        let result = Cli::try_parse_from(["japi", "build", "-t", "people", "--page", "2", "--offset", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_values() {
        let args = build(&["build", "-t", "people", "--limit", "0"]);
        let err = args.into_query(&PaginationConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "invalid_argument");

        let args = build(&["build", "-t", "people", "--cursor", "abc", "--page-size", "0"]);
        let err = args.into_query(&PaginationConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "invalid_argument");
    }

    #[test]
    fn test_cursor_style_rejects_page_number() {
        let config = PaginationConfig {
            style: PaginationStyle::Cursor,
            ..PaginationConfig::default()
        };
        let args = build(&["build", "-t", "people", "--page", "5"]);
        let err = args.into_query(&config).unwrap_err();
        assert_eq!(err.error_code(), "invalid_argument");

        let args = build(&["build", "-t", "people", "--page", "1", "--page-size", "5"]);
        let query = args.into_query(&config).unwrap();
        assert_eq!(query.serialize(), "people?page%5Bsize%5D=5");
    }
}
