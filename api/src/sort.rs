use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

// a sortable field value
//
// text compares case-insensitively; values of different kinds compare equal
#[derive(Clone, Debug, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(i64),
}

impl SortValue {
    fn compare(&self, other: &SortValue) -> Option<Ordering> {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => Some(a.to_uppercase().cmp(&b.to_uppercase())),
            (SortValue::Number(a), SortValue::Number(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

// build a comparator over a single field
//
// if either side is missing the field, the two compare equal
pub fn make_comparator<T, F>(key: F, order: SortOrder) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> Option<SortValue>,
{
    move |a, b| {
        let comparison = match (key(a), key(b)) {
            (Some(a), Some(b)) => a.compare(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };

        match order {
            SortOrder::Asc => comparison,
            SortOrder::Desc => comparison.reverse(),
        }
    }
}
