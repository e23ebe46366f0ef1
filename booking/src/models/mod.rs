pub mod event;
pub mod payment;
pub mod reservation;
pub mod ticket;
pub mod user;

pub use event::Event;
pub use payment::{Payment, PAYMENT_METHODS};
pub use reservation::Reservation;
pub use ticket::{Ticket, TicketKind};
pub use user::{Account, Role, User};
