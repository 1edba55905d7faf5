//! Structured cargo predicates and the builder that derives them from
//! search parameters.
//!
//! A `CargoPredicate` is a conjunction of `Criterion` values. Each criterion
//! is tagged by comparison kind (equals, range, contains) and carries a
//! payload typed for the field it constrains, so a predicate can be evaluated
//! in memory (`matches`) or translated into a sea-orm `Condition`.

use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{ColumnTrait, Condition};

use models::search::fold_case;
use models::{cargo, vehicle};

use super::domain::{Cargo, CargoSearchRequest, CargoStatus};

/// Exact match on one field.
#[derive(Debug, Clone, PartialEq)]
pub enum EqualsField {
    Description(String),
    Status(CargoStatus),
    VehicleNumber(String),
}

/// Inclusive bounds on a numeric field; a missing bound is open.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeField {
    Weight { min: Option<f64>, max: Option<f64> },
}

/// Text fields that support substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Description,
    VehicleNumber,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Equals(EqualsField),
    Range(RangeField),
    /// Case-insensitive substring match.
    Contains(TextField, String),
}

impl Criterion {
    pub fn matches(&self, cargo: &Cargo) -> bool {
        match self {
            Criterion::Equals(EqualsField::Description(d)) => cargo.description == *d,
            Criterion::Equals(EqualsField::Status(s)) => cargo.status == *s,
            Criterion::Equals(EqualsField::VehicleNumber(n)) => cargo.vehicle.number == *n,
            Criterion::Range(RangeField::Weight { min, max }) => {
                min.map_or(true, |m| cargo.weight >= m) && max.map_or(true, |m| cargo.weight <= m)
            }
            Criterion::Contains(field, needle) => {
                let hay = match field {
                    TextField::Description => &cargo.description,
                    TextField::VehicleNumber => &cargo.vehicle.number,
                };
                fold_case(hay).contains(&fold_case(needle))
            }
        }
    }

    /// Translate into a condition over `cargo` joined with `vehicle`.
    pub fn to_condition(&self) -> Condition {
        match self {
            Criterion::Equals(EqualsField::Description(d)) => {
                Condition::all().add(cargo::Column::Description.eq(d.clone()))
            }
            Criterion::Equals(EqualsField::Status(s)) => Condition::all().add(cargo::Column::Status.eq(*s)),
            Criterion::Equals(EqualsField::VehicleNumber(n)) => {
                Condition::all().add(vehicle::Column::Number.eq(n.clone()))
            }
            Criterion::Range(RangeField::Weight { min, max }) => Condition::all()
                .add_option(min.map(|m| cargo::Column::Weight.gte(m)))
                .add_option(max.map(|m| cargo::Column::Weight.lte(m))),
            Criterion::Contains(field, needle) => {
                let column = match field {
                    TextField::Description => Expr::col((cargo::Entity, cargo::Column::DescriptionFolded)),
                    TextField::VehicleNumber => Expr::col((vehicle::Entity, vehicle::Column::NumberFolded)),
                };
                Condition::all().add(column.like(contains_pattern(needle)))
            }
        }
    }
}

/// `%needle%` over the folded needle, with LIKE wildcards in the needle
/// taken literally (escaped with `\`).
fn like_contains_pattern(needle: &str) -> String {
    let folded = fold_case(needle);
    let mut pattern = String::with_capacity(folded.len() + 2);
    pattern.push('%');
    for ch in folded.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn contains_pattern(needle: &str) -> LikeExpr {
    LikeExpr::new(like_contains_pattern(needle)).escape('\\')
}

/// Conjunction of criteria. The empty predicate matches every cargo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CargoPredicate {
    criteria: Vec<Criterion>,
}

impl CargoPredicate {
    pub fn all() -> Self { Self::default() }

    pub fn and(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn criteria(&self) -> &[Criterion] { &self.criteria }

    pub fn is_empty(&self) -> bool { self.criteria.is_empty() }

    pub fn matches(&self, cargo: &Cargo) -> bool {
        self.criteria.iter().all(|c| c.matches(cargo))
    }

    pub fn to_condition(&self) -> Condition {
        self.criteria
            .iter()
            .fold(Condition::all(), |acc, c| acc.add(c.to_condition()))
    }
}

/// Derives a `CargoPredicate` from `CargoSearchRequest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoFilterBuilder;

impl CargoFilterBuilder {
    pub fn build(&self, search: &CargoSearchRequest) -> CargoPredicate {
        let mut predicate = CargoPredicate::all();
        if let Some(text) = non_blank(search.description.as_deref()) {
            predicate = predicate.and(Criterion::Contains(TextField::Description, text));
        }
        if let Some(status) = search.status {
            predicate = predicate.and(Criterion::Equals(EqualsField::Status(status)));
        }
        if search.min_weight.is_some() || search.max_weight.is_some() {
            predicate = predicate.and(Criterion::Range(RangeField::Weight {
                min: search.min_weight,
                max: search.max_weight,
            }));
        }
        if let Some(number) = non_blank(search.vehicle_number.as_deref()) {
            predicate = predicate.and(Criterion::Equals(EqualsField::VehicleNumber(number)));
        }
        predicate
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}
