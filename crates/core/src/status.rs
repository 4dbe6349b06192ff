//! Status registries mapping to the SMALLINT lookup tables.
//!
//! Each enum variant's discriminant and display name match the seed rows of
//! the corresponding `*_statuses` table. Id 1 is the initial state of every
//! registry; lifecycle code relies on that.

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

macro_rules! define_status_registry {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Every registry entry in id order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Human-readable name stored in the lookup table.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Resolve a database id back to a registry entry.
            pub fn from_id(id: StatusId) -> Option<Self> {
                Self::ALL.iter().copied().find(|s| s.id() == id)
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_registry! {
    /// Project lifecycle status. Transitions are unguarded.
    ProjectStatus {
        Pending = 1 => "Pending",
        InProgress = 2 => "In Progress",
        Blocked = 3 => "Blocked",
        Review = 4 => "Review",
        Done = 5 => "Done",
        Cancelled = 6 => "Cancelled",
    }
}

define_status_registry! {
    /// Task workflow status. Any status may follow any other.
    TaskStatus {
        ToDo = 1 => "To Do",
        InProgress = 2 => "In Progress",
        AwaitingApproval = 3 => "Awaiting Approval",
        Done = 4 => "Done",
    }
}

impl ProjectStatus {
    /// Status every new project starts in.
    pub const INITIAL: ProjectStatus = ProjectStatus::Pending;
}

impl TaskStatus {
    /// Status every new task starts in.
    pub const INITIAL: TaskStatus = TaskStatus::ToDo;
}
