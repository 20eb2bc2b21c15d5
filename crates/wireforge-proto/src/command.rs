//! Command registry: id to display name, per traffic direction.
//!
//! Pure data for logs and diagnostics. The codec never branches on a
//! command's meaning; layers above interpret the payload per command.
//! The two directions are independent id namespaces.

/// Traffic direction a command id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Client to server.
    ToServer,
    /// Server to client.
    ToClient,
}

impl Direction {
    /// The opposite direction.
    pub const fn opposite(self) -> Self {
        match self {
            Self::ToServer => Self::ToClient,
            Self::ToClient => Self::ToServer,
        }
    }

    /// Lowercase label for structured log fields.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToServer => "to_server",
            Self::ToClient => "to_client",
        }
    }
}

/// Well-known client-to-server command ids.
pub mod to_server {
    /// Session handshake opener.
    pub const HELLO: u16 = 0x02;
    /// Authentication credentials.
    pub const AUTH: u16 = 0x03;
    /// Client finished loading and is ready for world data.
    pub const READY: u16 = 0x04;
    /// Keepalive probe.
    pub const PING: u16 = 0x10;
    /// Player position and view update.
    pub const PLAYER_MOVE: u16 = 0x11;
    /// Chat line.
    pub const CHAT: u16 = 0x12;
    /// Interaction with a world object.
    pub const INTERACT: u16 = 0x13;
    /// Inventory manipulation.
    pub const INVENTORY_ACTION: u16 = 0x14;
    /// Request for a world region.
    pub const REGION_REQUEST: u16 = 0x20;
    /// Acknowledge received regions.
    pub const REGION_ACK: u16 = 0x21;
    /// Request for media files by name.
    pub const MEDIA_REQUEST: u16 = 0x22;
    /// Graceful disconnect.
    pub const DISCONNECT: u16 = 0x30;
}

/// Well-known server-to-client command ids.
pub mod to_client {
    /// Handshake acceptance with session parameters.
    pub const HELLO_ACK: u16 = 0x02;
    /// Authentication verdict.
    pub const AUTH_RESULT: u16 = 0x03;
    /// Keepalive reply.
    pub const PONG: u16 = 0x10;
    /// Authoritative player state correction.
    pub const PLAYER_STATE: u16 = 0x11;
    /// Chat line relayed to clients.
    pub const CHAT_RELAY: u16 = 0x12;
    /// World time of day.
    pub const WORLD_TIME: u16 = 0x13;
    /// Compressed world region payload.
    pub const REGION_DATA: u16 = 0x20;
    /// Entity entered the client's view.
    pub const ENTITY_SPAWN: u16 = 0x21;
    /// Entity state delta.
    pub const ENTITY_UPDATE: u16 = 0x22;
    /// Entity left the client's view.
    pub const ENTITY_REMOVE: u16 = 0x23;
    /// Media file announcement.
    pub const MEDIA_ANNOUNCE: u16 = 0x24;
    /// Server-initiated disconnect with reason.
    pub const KICK: u16 = 0x30;
}

/// Display name for a command id, `"UNKNOWN"` for anything unregistered.
pub fn command_name(direction: Direction, command: u16) -> &'static str {
    match direction {
        Direction::ToServer => to_server_name(command),
        Direction::ToClient => to_client_name(command),
    }
}

fn to_server_name(command: u16) -> &'static str {
    match command {
        to_server::HELLO => "HELLO",
        to_server::AUTH => "AUTH",
        to_server::READY => "READY",
        to_server::PING => "PING",
        to_server::PLAYER_MOVE => "PLAYER_MOVE",
        to_server::CHAT => "CHAT",
        to_server::INTERACT => "INTERACT",
        to_server::INVENTORY_ACTION => "INVENTORY_ACTION",
        to_server::REGION_REQUEST => "REGION_REQUEST",
        to_server::REGION_ACK => "REGION_ACK",
        to_server::MEDIA_REQUEST => "MEDIA_REQUEST",
        to_server::DISCONNECT => "DISCONNECT",
        _ => "UNKNOWN",
    }
}

fn to_client_name(command: u16) -> &'static str {
    match command {
        to_client::HELLO_ACK => "HELLO_ACK",
        to_client::AUTH_RESULT => "AUTH_RESULT",
        to_client::PONG => "PONG",
        to_client::PLAYER_STATE => "PLAYER_STATE",
        to_client::CHAT_RELAY => "CHAT_RELAY",
        to_client::WORLD_TIME => "WORLD_TIME",
        to_client::REGION_DATA => "REGION_DATA",
        to_client::ENTITY_SPAWN => "ENTITY_SPAWN",
        to_client::ENTITY_UPDATE => "ENTITY_UPDATE",
        to_client::ENTITY_REMOVE => "ENTITY_REMOVE",
        to_client::MEDIA_ANNOUNCE => "MEDIA_ANNOUNCE",
        to_client::KICK => "KICK",
        _ => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, command_name, to_client, to_server};

    #[test]
    fn directions_are_separate_namespaces() {
        assert_eq!(command_name(Direction::ToServer, to_server::CHAT), "CHAT");
        assert_eq!(command_name(Direction::ToClient, to_client::CHAT_RELAY), "CHAT_RELAY");
        // Same numeric id, different meaning per direction.
        assert_eq!(to_server::CHAT, to_client::CHAT_RELAY);
    }

    #[test]
    fn unregistered_ids_fall_back() {
        assert_eq!(command_name(Direction::ToServer, 0xFFFF), "UNKNOWN");
        assert_eq!(command_name(Direction::ToClient, 0xFFFF), "UNKNOWN");
    }

    #[test]
    fn opposite_is_involutive() {
        assert_eq!(Direction::ToServer.opposite(), Direction::ToClient);
        assert_eq!(Direction::ToServer.opposite().opposite(), Direction::ToServer);
    }
}
