// fixtures/tables/search_counts.rs
//
// Known search history for trending tests: four terms with distinct
// counts so the expected ranking is dune, batman, alien, inception.

use crate::fixtures::TestTable;

pub struct SearchCountsTable;

impl SearchCountsTable {
    /// Search terms in the order `get_trending_movies` must return them
    pub const EXPECTED_RANKING: [&'static str; 4] = ["dune", "batman", "alien", "inception"];
}

impl TestTable for SearchCountsTable {
    fn setup_sql() -> &'static [&'static str] {
        &[
            "TRUNCATE trending.search_counts",
            r#"
            INSERT INTO trending.search_counts (id, search_term, search_count, movie_id, title, poster_url)
            VALUES
                ('fixture-dune', 'dune', 5, 438631, 'Dune', 'https://image.tmdb.org/t/p/w500/d5NXSklXo0qyIYkgV94XAgMIckC.jpg'),
                ('fixture-batman', 'batman', 3, 272, 'Batman Begins', 'https://image.tmdb.org/t/p/w500/8RW2runSEc34IwKN2D1aPcJd2UL.jpg'),
                ('fixture-alien', 'alien', 2, 348, 'Alien', 'https://image.tmdb.org/t/p/w500/vfrQk5IPloGg1v9Rzbh2Eg3VGyM.jpg'),
                ('fixture-inception', 'inception', 1, 27205, 'Inception', '')
            "#,
        ]
    }

    fn teardown_sql() -> &'static [&'static str] {
        &["TRUNCATE trending.search_counts"]
    }
}
