//! Wire and display models shared across the crumbline workspace:
//! breadcrumb records as received from the backend, their normalized
//! display form, the parent-event subset consulted for the virtual
//! breadcrumb, and the linked-event lookup responses.

mod breadcrumbs;
mod event;
mod linked_event;

pub use breadcrumbs::BreadcrumbLevel;
pub use breadcrumbs::BreadcrumbType;
pub use breadcrumbs::Crumb;
pub use breadcrumbs::RawCrumb;
pub use event::EventTag;
pub use event::ExceptionValue;
pub use event::ParentEvent;
pub use linked_event::EventIdLookup;
pub use linked_event::IssueLookup;
pub use linked_event::Project;
pub use linked_event::StoredLinkedEvent;
