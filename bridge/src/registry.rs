//! Command table: name to handler, bound once at interpreter startup.
//!
//! The table is explicit startup configuration, built as a value and handed
//! to whatever installs commands into the host; there is no ambient global
//! registration. Each name binds exactly one handler, either the modern
//! value-handle convention or the legacy flat-string convention, and the
//! legacy variant is reached only through the calling-convention adapter.

use std::collections::hash_map::{Entry, HashMap};
use std::ffi::CStr;

use thiserror::Error;
use tracing::trace;

use host::{Interp, Obj, Outcome};

use crate::legacy;

/// Modern handler: context, interpreter, argument value handles. Returns
/// the interpreter-level outcome obtained from the result reporter.
pub type ModernFn<I, C> = fn(ctx: &mut C, ip: &mut I, args: &[Obj]) -> Outcome;

/// Legacy handler: context, interpreter, flat C-string arguments.
pub type LegacyFn<I, C> = fn(ctx: &mut C, ip: &mut I, args: &[&CStr]) -> Outcome;

/// One registered native command.
pub enum Command<I, C> {
    Modern(ModernFn<I, C>),
    Legacy(LegacyFn<I, C>),
}

impl<I, C> Clone for Command<I, C> {
    fn clone(&self) -> Self {
        match self {
            Command::Modern(f) => Command::Modern(*f),
            Command::Legacy(f) => Command::Legacy(*f),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command `{0}` is already registered")]
    Duplicate(String),
    #[error("unknown command `{0}`")]
    Unknown(String),
}

/// Registry mapping command name to handler variant.
pub struct CommandTable<I, C> {
    commands: HashMap<String, Command<I, C>>,
}

impl<I, C> Default for CommandTable<I, C> {
    fn default() -> Self {
        CommandTable {
            commands: HashMap::new(),
        }
    }
}

impl<I: Interp, C> CommandTable<I, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn register_modern(&mut self, name: &str, f: ModernFn<I, C>) -> Result<(), RegistryError> {
        self.register(name, Command::Modern(f))
    }

    pub fn register_legacy(&mut self, name: &str, f: LegacyFn<I, C>) -> Result<(), RegistryError> {
        self.register(name, Command::Legacy(f))
    }

    /// Commands bind once; rebinding a name is an error.
    pub fn register(&mut self, name: &str, command: Command<I, C>) -> Result<(), RegistryError> {
        match self.commands.entry(name.to_string()) {
            Entry::Occupied(_) => Err(RegistryError::Duplicate(name.to_string())),
            Entry::Vacant(e) => {
                e.insert(command);
                Ok(())
            }
        }
    }

    /// Dispatch one command invocation. Legacy handlers go through the
    /// calling-convention adapter; either way the handler's outcome is
    /// forwarded unchanged.
    pub fn dispatch(
        &self,
        ip: &mut I,
        ctx: &mut C,
        name: &str,
        args: &[Obj],
    ) -> Result<Outcome, RegistryError> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))?;
        trace!(command = name, argc = args.len(), "dispatching native command");
        match command {
            Command::Modern(f) => Ok(f(ctx, ip, args)),
            Command::Legacy(f) => Ok(legacy::call_legacy(*f, ctx, ip, args)),
        }
    }
}
