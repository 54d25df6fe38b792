//! Request/response plumbing between the UI and the bridge.

use crossbeam_channel::{Receiver, Sender};

use crate::commands::MethodCall;
use crate::error::IpcError;
use crate::types::CommandResult;
use crate::IpcResult;

/// A call waiting for the bridge to answer it.
#[derive(Debug)]
pub struct PendingCall {
    /// The invocation.
    pub call: MethodCall,

    /// Where the single reply goes.
    pub reply: Sender<CommandResult>,
}

impl PendingCall {
    /// Create a pending call and the receiver for its reply.
    pub fn new(call: MethodCall) -> (Self, Receiver<CommandResult>) {
        let (reply, reply_rx) = crossbeam_channel::bounded(1);
        (Self { call, reply }, reply_rx)
    }
}

/// UI-side handle for invoking bridge methods.
#[derive(Debug, Clone)]
pub struct MethodChannelClient {
    call_tx: Sender<PendingCall>,
}

impl MethodChannelClient {
    /// Wrap the sending half of a method channel.
    pub fn new(call_tx: Sender<PendingCall>) -> Self {
        Self { call_tx }
    }

    /// Invoke a method and wait for its reply.
    pub fn invoke(
        &self,
        method: &str,
        arguments: Option<serde_json::Value>,
    ) -> IpcResult<CommandResult> {
        let call = match arguments {
            Some(arguments) => MethodCall::with_arguments(method, arguments),
            None => MethodCall::new(method),
        };
        let (pending, reply_rx) = PendingCall::new(call);

        self.call_tx
            .send(pending)
            .map_err(|_| IpcError::Disconnected)?;

        reply_rx
            .recv()
            .map_err(|_| IpcError::NoReply(method.to_string()))
    }
}
