//! Main [`Receiver`] client implementation.
//!
//! This module provides the high-level [`Receiver`] client that combines a
//! model's registry with the transaction engine. Every operation is checked
//! against the registry before anything is written to the transport.

use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::commands::{CommandHandler, TransactionConfig};
use crate::error::{Error, ReplyError, Result};
use crate::protocol::{Command, Operator};
use crate::registry::{Model, Registry, Value, Variable};
use crate::transport::{SerialTransport, Transport, serial::SerialConfig};

/// Client for controlling a NAD receiver.
pub struct Receiver<T> {
    transport: Arc<Mutex<T>>,
    commands: CommandHandler<T>,
    registry: &'static Registry,
}

impl Receiver<SerialTransport> {
    /// Creates a new client for a serial port.
    ///
    /// # Arguments
    ///
    /// * `port` - Serial port path (e.g., "/dev/ttyUSB0")
    /// * `model` - Receiver model, selects the command registry
    ///
    /// # Returns
    ///
    /// A new client (not yet connected).
    #[must_use]
    pub fn serial(port: impl Into<String>, model: Model) -> Self {
        Self::with_serial_config(SerialConfig::new(port), model)
    }

    /// Creates a new client with custom serial configuration.
    #[must_use]
    pub fn with_serial_config(config: SerialConfig, model: Model) -> Self {
        Self::new(SerialTransport::new(config), model)
    }
}

impl<T: Transport> Receiver<T> {
    /// Creates a new client over an arbitrary transport.
    #[must_use]
    pub fn new(transport: T, model: Model) -> Self {
        Self::with_config(transport, model, TransactionConfig::default())
    }

    /// Creates a new client with custom transaction timings.
    #[must_use]
    pub fn with_config(transport: T, model: Model, config: TransactionConfig) -> Self {
        let transport = Arc::new(Mutex::new(transport));
        let commands = CommandHandler::new(Arc::clone(&transport), config);
        Self {
            transport,
            commands,
            registry: model.registry(),
        }
    }

    /// Opens the transport.
    pub async fn connect(&self) -> Result<()> {
        let mut transport = self.transport.lock().await;
        transport.connect().await
    }

    /// Closes the transport.
    pub async fn disconnect(&self) -> Result<()> {
        let mut transport = self.transport.lock().await;
        transport.disconnect().await
    }

    /// Returns true if connected.
    pub async fn is_connected(&self) -> bool {
        let transport = self.transport.lock().await;
        transport.is_connected()
    }

    /// Returns the receiver model.
    #[must_use]
    pub const fn model(&self) -> Model {
        self.registry.model()
    }

    /// Returns the command registry in use.
    #[must_use]
    pub const fn registry(&self) -> &'static Registry {
        self.registry
    }

    /// Returns the descriptor of a variable.
    pub fn describe(&self, name: &str) -> Result<&'static Variable> {
        self.registry.lookup(name)
    }

    /// Returns the command handler for direct transaction access.
    #[must_use]
    pub const fn commands(&self) -> &CommandHandler<T> {
        &self.commands
    }

    /// Sets the reply timeout.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.commands.set_timeout(timeout);
    }

    // ==================== Operations ====================

    /// Queries a variable and returns the raw reply payload.
    ///
    /// ```text
    /// Main.Power?  ->  On
    /// ```
    pub async fn get(&self, name: &str) -> Result<String> {
        self.check(name, Operator::Query)?;
        let command = Command::query(name);
        let payload = self.commands.transact(&command).await?;
        if payload.is_empty() {
            return Err(ReplyError::EmptyPayload {
                command: command.to_string(),
            }
            .into());
        }
        Ok(payload)
    }

    /// Queries a variable and parses the payload by its value type.
    pub async fn get_value(&self, name: &str) -> Result<Value> {
        let variable = self.check(name, Operator::Query)?;
        let payload = self.get(name).await?;
        variable.parse(&payload).ok_or_else(|| {
            ReplyError::UnexpectedValue {
                name: name.to_owned(),
                payload,
            }
            .into()
        })
    }

    /// Assigns a value and returns the receiver's confirmation payload.
    pub async fn set(&self, name: &str, value: impl Display) -> Result<String> {
        let command = self.assignment(name, value)?;
        self.commands.transact(&command).await
    }

    /// Assigns a value without waiting for the confirmation.
    pub async fn set_unconfirmed(&self, name: &str, value: impl Display) -> Result<()> {
        let command = self.assignment(name, value)?;
        self.commands.send_fire_and_forget(&command).await
    }

    /// Steps a variable up.
    pub async fn increment(&self, name: &str) -> Result<String> {
        self.check(name, Operator::Increment)?;
        self.commands.transact(&Command::increment(name)).await
    }

    /// Steps a variable down.
    pub async fn decrement(&self, name: &str) -> Result<String> {
        self.check(name, Operator::Decrement)?;
        self.commands.transact(&Command::decrement(name)).await
    }

    // ==================== Validation ====================

    /// Resolves `name` and checks that it accepts `operator`.
    fn check(&self, name: &str, operator: Operator) -> Result<&'static Variable> {
        let variable = self.registry.lookup(name)?;
        if !variable.operators.contains(operator) {
            return Err(Error::OperatorNotSupported {
                name: name.to_owned(),
                operator,
                allowed: variable.operators,
            });
        }
        Ok(variable)
    }

    /// Validates an assignment and builds its command.
    fn assignment(&self, name: &str, value: impl Display) -> Result<Command> {
        let variable = self.check(name, Operator::Assign)?;
        let value = value.to_string();
        if !variable.allowed.accepts(&value) {
            return Err(Error::InvalidValue {
                name: name.to_owned(),
                value,
                allowed: variable.allowed,
            });
        }
        Ok(Command::assign(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::OperatorSet;
    use crate::registry::{AllowedValues, ValueRange};
    use crate::transport::mock::{MockTransport, Reply};

    fn receiver(mock: &MockTransport, model: Model) -> Receiver<MockTransport> {
        Receiver::with_config(
            mock.clone(),
            model,
            TransactionConfig::new().timeout(Duration::from_millis(200)),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_power() {
        let mock = MockTransport::new();
        mock.reply_bytes(b"\rMain.Power?On\r");

        let power = receiver(&mock, Model::T777).get("Main.Power").await.unwrap();

        assert_eq!(power, "On");
        assert_eq!(&mock.writes()[0][..], b"\rMain.Power?\r");
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_zone_volume() {
        let mock = MockTransport::new();
        mock.reply_bytes(b"\rZone2.Volume=-50\r");

        let confirmed = receiver(&mock, Model::T777)
            .set("Zone2.Volume", -50)
            .await
            .unwrap();

        assert_eq!(confirmed, "-50");
        assert_eq!(&mock.writes()[0][..], b"\rZone2.Volume=-50\r");
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_out_of_range_writes_nothing() {
        let mock = MockTransport::new();

        let err = receiver(&mock, Model::T777)
            .set("Zone2.Volume", 25)
            .await
            .unwrap_err();

        match err {
            Error::InvalidValue {
                name,
                value,
                allowed,
            } => {
                assert_eq!(name, "Zone2.Volume");
                assert_eq!(value, "25");
                assert_eq!(allowed, AllowedValues::Range(ValueRange::new(-99, 19)));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(mock.writes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_rejects_explicit_plus_sign() {
        let mock = MockTransport::new();

        let err = receiver(&mock, Model::T777)
            .set("Main.Volume", "+5")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidValue { .. }));
        assert!(mock.writes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_level_range_bounds() {
        let mock = MockTransport::new();
        mock.reply(Reply::Echo(""));
        let receiver = receiver(&mock, Model::Generic);

        let err = receiver.set("Main.Level.Center", 13).await.unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
        assert!(mock.writes().is_empty());

        let confirmed = receiver.set("Main.Level.Center", 12).await.unwrap();
        assert_eq!(confirmed, "12");
        assert_eq!(&mock.writes()[0][..], b"\rMain.Level.Center=12\r");
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_enumerated() {
        let mock = MockTransport::new();
        mock.reply(Reply::Echo(""));
        let receiver = receiver(&mock, Model::T187);

        let err = receiver
            .set("Zone2.VolumeControl", "Loud")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));

        let confirmed = receiver
            .set("Zone2.VolumeControl", "Variable")
            .await
            .unwrap();
        assert_eq!(confirmed, "Variable");
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_variable_writes_nothing() {
        let mock = MockTransport::new();
        let receiver = receiver(&mock, Model::T777);

        for result in [
            receiver.get("Main.Warp").await,
            receiver.set("Main.Warp", 1).await,
            receiver.increment("Main.Warp").await,
            receiver.decrement("Main.Warp").await,
        ] {
            assert!(matches!(result, Err(Error::UnknownVariable { .. })));
        }
        assert!(mock.writes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_only_variable() {
        let mock = MockTransport::new();
        mock.reply(Reply::Echo("T777"));
        let receiver = receiver(&mock, Model::T777);

        for result in [
            receiver.set("Main.Model", "T787").await,
            receiver.increment("Main.Model").await,
            receiver.decrement("Main.Model").await,
        ] {
            match result {
                Err(Error::OperatorNotSupported { name, allowed, .. }) => {
                    assert_eq!(name, "Main.Model");
                    assert_eq!(allowed, OperatorSet::QUERY);
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
        assert!(mock.writes().is_empty());

        assert_eq!(receiver.get("Main.Model").await.unwrap(), "T777");
    }

    #[tokio::test(start_paused = true)]
    async fn test_step_only_variable() {
        let mock = MockTransport::new();
        mock.reply(Reply::Echo(""));
        let receiver = receiver(&mock, Model::Generic);

        let err = receiver.get("Ipod.Track").await.unwrap_err();
        assert!(matches!(
            err,
            Error::OperatorNotSupported {
                operator: Operator::Query,
                ..
            }
        ));

        receiver.increment("Ipod.Track").await.unwrap();
        assert_eq!(&mock.writes()[0][..], b"\rIpod.Track+\r");
    }

    #[tokio::test(start_paused = true)]
    async fn test_increment_and_decrement_volume() {
        let mock = MockTransport::new();
        mock.reply_bytes(b"\rMain.Volume+\rMain.Volume=-10\r");
        mock.reply_bytes(b"\rMain.Volume-\rMain.Volume=-11\r");
        let receiver = receiver(&mock, Model::T787);

        assert_eq!(receiver.increment("Main.Volume").await.unwrap(), "-10");
        assert_eq!(receiver.decrement("Main.Volume").await.unwrap(), "-11");
    }

    #[tokio::test(start_paused = true)]
    async fn test_free_form_value() {
        let mock = MockTransport::new();
        mock.reply(Reply::Echo(""));
        let receiver = receiver(&mock, Model::T777);

        receiver.set("Tuner.FM.Frequency", "102.1").await.unwrap();
        assert_eq!(&mock.writes()[0][..], b"\rTuner.FM.Frequency=102.1\r");

        let err = receiver.set("Main.IR", "").await.unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_value_parses_by_type() {
        let mock = MockTransport::new();
        mock.reply_bytes(b"\rMain.Volume?\rMain.Volume=-11\r");
        mock.reply_bytes(b"\rMain.Mute?Off\r");
        mock.reply_bytes(b"\rZone3.Volume?high\r");
        let receiver = receiver(&mock, Model::T777);

        assert_eq!(
            receiver.get_value("Main.Volume").await.unwrap(),
            Value::Integer(-11)
        );
        assert_eq!(
            receiver.get_value("Main.Mute").await.unwrap(),
            Value::Text("Off".into())
        );
        assert!(matches!(
            receiver.get_value("Zone3.Volume").await,
            Err(Error::MalformedReply(ReplyError::UnexpectedValue { .. }))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_query_reply() {
        let mock = MockTransport::new();
        mock.reply(Reply::Echo(""));

        let err = receiver(&mock, Model::T777)
            .get("Main.Power")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedReply(ReplyError::EmptyPayload { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_leaves_client_usable() {
        let mock = MockTransport::new();
        mock.reply(Reply::Stall(b"\rMain.Power?"));
        mock.reply(Reply::Echo("On"));
        let receiver = receiver(&mock, Model::T777);

        let err = receiver.get("Main.Power").await.unwrap_err();
        assert!(matches!(err, Error::Timeout { timeout_ms: 200 }));

        assert_eq!(receiver.get("Main.Power").await.unwrap(), "On");
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_unconfirmed() {
        let mock = MockTransport::new();
        let receiver = receiver(&mock, Model::T777);

        receiver.set_unconfirmed("Main.Volume", -11).await.unwrap();
        assert_eq!(&mock.writes()[0][..], b"\rMain.Volume=-11\r");

        let err = receiver.set_unconfirmed("Main.Volume", 40).await.unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
        assert_eq!(mock.writes().len(), 1);
    }

    #[tokio::test]
    async fn test_connection_lifecycle() {
        let mock = MockTransport::new();
        let receiver = receiver(&mock, Model::T187);
        assert!(receiver.is_connected().await);

        receiver.disconnect().await.unwrap();
        assert!(!receiver.is_connected().await);
        assert!(matches!(
            receiver.get("Main.Power").await,
            Err(Error::NotConnected)
        ));

        receiver.connect().await.unwrap();
        assert!(receiver.is_connected().await);
        assert_eq!(receiver.model(), Model::T187);
        assert!(receiver.describe("Main.Power").is_ok());
    }
}
