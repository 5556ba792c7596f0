use sqlx::{Postgres, QueryBuilder};

use business::domain::catalog::filter::{CaseSensitivity, KeywordFilter};

const SELECT_PRODUCTS: &str = "SELECT id, name, category, description, price, url FROM products";

/// Unfiltered first rows in primary-key order.
pub fn first_products(limit: usize) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_PRODUCTS);
    push_limit(&mut builder, limit);
    builder
}

/// `OR` of `(category LIKE %k% OR name LIKE %k%)` over every keyword.
///
/// Keywords are always bound as parameters, never spliced into the SQL text.
pub fn search_products(filter: &KeywordFilter, limit: usize) -> QueryBuilder<'static, Postgres> {
    let operator = match filter.case_sensitivity() {
        CaseSensitivity::Sensitive => "LIKE",
        CaseSensitivity::Insensitive => "ILIKE",
    };

    let mut builder = QueryBuilder::new(SELECT_PRODUCTS);
    for (index, keyword) in filter.keywords().iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " OR " });

        let pattern = contains_pattern(keyword);
        builder.push(format!("(category {} ", operator));
        builder.push_bind(pattern.clone());
        builder.push(format!(" ESCAPE '\\' OR name {} ", operator));
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\')");
    }
    push_limit(&mut builder, limit);
    builder
}

fn push_limit(builder: &mut QueryBuilder<'static, Postgres>, limit: usize) {
    builder.push(" ORDER BY id LIMIT ");
    builder.push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
}

/// `%keyword%` with LIKE wildcards escaped so the keyword matches literally.
pub fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(keywords: &[&str], case_sensitivity: CaseSensitivity) -> KeywordFilter {
        KeywordFilter::new(
            keywords.iter().map(|k| k.to_string()).collect(),
            case_sensitivity,
        )
    }

    #[test]
    fn should_select_first_rows_by_primary_key() {
        let builder = first_products(5);

        assert_eq!(
            builder.sql(),
            "SELECT id, name, category, description, price, url FROM products ORDER BY id LIMIT $1"
        );
    }

    #[test]
    fn should_or_keyword_clauses_with_bound_parameters() {
        let builder = search_products(
            &filter(&["本", "コーヒー"], CaseSensitivity::Insensitive),
            5,
        );

        assert_eq!(
            builder.sql(),
            "SELECT id, name, category, description, price, url FROM products \
             WHERE (category ILIKE $1 ESCAPE '\\' OR name ILIKE $2 ESCAPE '\\') \
             OR (category ILIKE $3 ESCAPE '\\' OR name ILIKE $4 ESCAPE '\\') \
             ORDER BY id LIMIT $5"
        );
    }

    #[test]
    fn should_use_like_when_case_sensitive() {
        let builder = search_products(&filter(&["Book"], CaseSensitivity::Sensitive), 5);

        assert!(builder.sql().contains("(category LIKE $1 ESCAPE '\\' OR name LIKE $2"));
        assert!(!builder.sql().contains("ILIKE"));
    }

    #[test]
    fn should_never_splice_keyword_text_into_sql() {
        let builder = search_products(
            &filter(&["'; DROP TABLE products; --"], CaseSensitivity::Insensitive),
            5,
        );

        assert!(!builder.sql().contains("DROP TABLE"));
    }

    #[test]
    fn should_wrap_keyword_in_wildcards() {
        assert_eq!(contains_pattern("ギフト"), "%ギフト%");
    }

    #[test]
    fn should_escape_like_wildcards() {
        assert_eq!(contains_pattern("100%_off\\"), "%100\\%\\_off\\\\%");
    }
}
