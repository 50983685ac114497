/// Three-state change to an optional field of an issue or sprint.
///
/// A plain `Option<T>` cannot tell "leave the assignee alone" apart from
/// "unassign the issue", so partial updates carry one of these instead.
///
/// ```
/// use scrumer_domain::FieldUpdate;
///
/// let mut assignee = Some("u1".to_string());
/// FieldUpdate::NoChange.apply_to(&mut assignee);
/// assert_eq!(assignee.as_deref(), Some("u1"));
///
/// FieldUpdate::Set("u2".to_string()).apply_to(&mut assignee);
/// assert_eq!(assignee.as_deref(), Some("u2"));
///
/// FieldUpdate::Clear.apply_to(&mut assignee);
/// assert_eq!(assignee, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    NoChange,
    Set(T),
    Clear,
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldUpdate::Clear, FieldUpdate::Set)
    }
}
