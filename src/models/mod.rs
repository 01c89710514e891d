pub mod intent;
pub mod lex;
pub mod record;

pub use intent::SupportedIntent;
pub use lex::{
    Bot, ContentType, CurrentIntent, DialogAction, DialogActionType, FulfillmentResponse,
    FulfillmentState, IntentRequest, Message, SessionAttributes,
};
pub use record::{CompositeKey, Record, Table};
