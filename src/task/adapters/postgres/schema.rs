//! Diesel schema for task persistence.

diesel::table! {
    /// Task records keyed by unique identifier.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Optional task description.
        #[max_length = 500]
        description -> Nullable<Varchar>,
        /// Lifecycle status in canonical string form.
        #[max_length = 20]
        status -> Varchar,
    }
}
