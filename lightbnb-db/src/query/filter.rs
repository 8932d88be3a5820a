//! Dynamic property search query
//!
//! Optional filters are pushed onto a `sqlx::QueryBuilder` with every
//! value bound. Keyword choice (`WHERE` vs `AND`) depends only on whether
//! a predicate was already written, never on how many values are bound.

use sqlx::{Postgres, QueryBuilder};

use crate::models::PropertySearch;

const SELECT_PROPERTIES: &str = "SELECT properties.*, \
     avg(property_reviews.rating)::float8 AS average_rating \
     FROM properties \
     JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Tracks whether the WHERE keyword has been written yet.
struct Predicates<'b, 'args> {
    builder: &'b mut QueryBuilder<'args, Postgres>,
    emitted: bool,
}

impl<'b, 'args> Predicates<'b, 'args> {
    fn new(builder: &'b mut QueryBuilder<'args, Postgres>) -> Self {
        Self {
            builder,
            emitted: false,
        }
    }

    /// Open the next predicate and hand back the builder to finish it.
    fn next(&mut self) -> &mut QueryBuilder<'args, Postgres> {
        self.builder.push(if self.emitted { " AND " } else { " WHERE " });
        self.emitted = true;
        &mut *self.builder
    }
}

/// Filter clauses for a [`PropertySearch`]
pub struct PropertyFilter<'a> {
    search: &'a PropertySearch,
}

impl<'a> PropertyFilter<'a> {
    pub fn new(search: &'a PropertySearch) -> Self {
        Self { search }
    }

    /// Push the WHERE predicates. Goes between FROM/JOIN and GROUP BY.
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        let mut predicates = Predicates::new(builder);

        if let Some(city) = &self.search.city {
            predicates
                .next()
                .push("properties.city LIKE ")
                .push_bind(format!("%{}%", city));
        }

        if let Some(owner_id) = self.search.owner_id {
            predicates
                .next()
                .push("properties.owner_id = ")
                .push_bind(owner_id);
        }

        if let Some(range) = self.search.price {
            predicates
                .next()
                .push("properties.cost_per_night >= ")
                .push_bind(range.min)
                .push(" AND properties.cost_per_night <= ")
                .push_bind(range.max);
        }
    }

    /// Push the HAVING predicate on the aggregated rating. Goes after GROUP BY.
    pub fn push_having(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        if let Some(rating) = self.search.minimum_rating {
            builder
                .push(" HAVING avg(property_reviews.rating) >= ")
                .push_bind(rating);
        }
    }
}

/// Build the full property search: filters, grouping, cheapest first, capped at `limit`.
pub fn property_search(search: &PropertySearch, limit: i64) -> QueryBuilder<'static, Postgres> {
    let filter = PropertyFilter::new(search);
    let mut builder = QueryBuilder::new(SELECT_PROPERTIES);

    filter.push_where(&mut builder);
    builder.push(" GROUP BY properties.id");
    filter.push_having(&mut builder);
    builder.push(" ORDER BY properties.cost_per_night LIMIT ");
    builder.push_bind(limit);

    builder
}
