/// Events emitted by a registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`
/// and mirrored to `tracing` at debug level.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use restaurant_patterns::RegistryEvent;
///
/// let event = RegistryEvent::Acquire { type_name: "i32", created: true };
/// assert_eq!(event.to_string(), "acquire { type_name: i32, created: true }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A singleton was acquired.
    Acquire {
        /// The type name of the singleton (e.g., "restaurant_patterns::burger::Cheeseburger")
        type_name: &'static str,
        /// Whether this call ran the one-time initialisation
        created: bool,
    },

    /// An existence check was performed.
    Contains {
        /// The type name that was checked
        type_name: &'static str,
        /// Whether the singleton has been created
        found: bool,
    },

    /// The instance was looked up without creating it.
    Peek {
        /// The type name that was looked up
        type_name: &'static str,
        /// Whether an instance was handed out
        found: bool,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Acquire { type_name, created } => {
                write!(f, "acquire {{ type_name: {type_name}, created: {created} }}")
            }
            RegistryEvent::Contains { type_name, found } => {
                write!(f, "contains {{ type_name: {type_name}, found: {found} }}")
            }
            RegistryEvent::Peek { type_name, found } => {
                write!(f, "peek {{ type_name: {type_name}, found: {found} }}")
            }
        }
    }
}
