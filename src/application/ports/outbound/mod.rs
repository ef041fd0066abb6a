//! Outbound ports - Interfaces that the application requires from external systems

mod chat_gateway_port;

pub use chat_gateway_port::{
    ChatGateway, CommandDefinition, CommandOption, GatewayError, Interaction, OptionKind,
};
