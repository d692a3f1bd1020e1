//! The model container: declarations, action bodies, and invocation.
//!
//! A [`Model`] owns the retained IR, the runtime state, the name interner,
//! and the registered body closures. Defining things never evaluates
//! anything; an action body plays exactly once, on its first invocation, and
//! the captured statement sequence is replayed against the live state on
//! every invocation after that.

use std::collections::HashMap;
use std::rc::Rc;

use crate::builder::{ActionBuilder, IntoReturnValues};
use crate::error::ModelError;
use crate::eval::Evaluator;
use crate::state::ModelState;
use strata_ir::{
    ActionId, ConstId, ExprId, Ident, Interner, ModelIr, PortDirection, PortId, StmtId, VarId,
};

type BodyFn = dyn Fn(&mut ActionBuilder<'_>) -> Vec<ExprId>;

/// What an action invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// The body yielded nothing.
    Unit,
    /// The body yielded a single value.
    Scalar(i64),
    /// The body yielded two or more values, in authoring order.
    Values(Vec<i64>),
}

impl ActionResult {
    fn from_payload(payload: Option<Vec<i64>>) -> Self {
        match payload {
            None => ActionResult::Unit,
            Some(values) if values.is_empty() => ActionResult::Unit,
            Some(values) if values.len() == 1 => ActionResult::Scalar(values[0]),
            Some(values) => ActionResult::Values(values),
        }
    }

    /// The single value, if this result is a scalar.
    pub fn scalar(&self) -> Option<i64> {
        match self {
            ActionResult::Scalar(value) => Some(*value),
            _ => None,
        }
    }
}

/// What a name resolved to, in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// A defined action.
    Action(ActionId),
    /// A declared port.
    Port(PortId),
    /// A declared variable.
    Variable(VarId),
    /// A declared named constant.
    Const(ConstId),
    /// The name exists in no registry.
    NotFound,
}

/// One behavioral memory model: declarations, actions, and live state.
pub struct Model {
    ir: ModelIr,
    state: ModelState,
    interner: Interner,
    bodies: HashMap<ActionId, Rc<BodyFn>>,
}

impl Model {
    /// Creates an empty model with `mem_size` memory cells.
    pub fn new(mem_size: usize) -> Self {
        Self {
            ir: ModelIr::new(mem_size),
            state: ModelState::new(mem_size),
            interner: Interner::new(),
            bodies: HashMap::new(),
        }
    }

    /// Declares a variable initialized to `init`. Idempotent per name.
    pub fn define_variable(&mut self, name: &str, width: u32, init: i64) -> VarId {
        let name = self.interner.intern(name);
        let before = self.ir.vars.len();
        let id = self.ir.declare_variable(name, width, init);
        if self.ir.vars.len() > before {
            self.state.push_var(init);
        }
        id
    }

    /// Declares an input port initialized to zero. Idempotent per name.
    pub fn define_port_in(&mut self, name: &str, width: u32) -> PortId {
        self.define_port(name, width, PortDirection::In, 0)
    }

    /// Declares an output port initialized to zero. Idempotent per name.
    pub fn define_port_out(&mut self, name: &str, width: u32) -> PortId {
        self.define_port(name, width, PortDirection::Out, 0)
    }

    /// Declares a port with an explicit direction and initial value.
    /// Idempotent per name.
    pub fn define_port(
        &mut self,
        name: &str,
        width: u32,
        direction: PortDirection,
        init: i64,
    ) -> PortId {
        let name = self.interner.intern(name);
        let before = self.ir.ports.len();
        let id = self.ir.declare_port(name, width, direction, init);
        if self.ir.ports.len() > before {
            self.state.push_port(init);
        }
        id
    }

    /// Declares a named constant. Idempotent per name.
    pub fn define_const(&mut self, name: &str, value: i64) -> ConstId {
        let name = self.interner.intern(name);
        self.ir.declare_const(name, value)
    }

    /// Registers an action body under `name`.
    ///
    /// The body is not played here. Re-defining an existing action replaces
    /// its body and discards any cached statement sequence.
    pub fn define_action<F, R>(&mut self, name: &str, body: F) -> ActionId
    where
        F: Fn(&mut ActionBuilder<'_>) -> R + 'static,
        R: IntoReturnValues,
    {
        let name = self.interner.intern(name);
        let id = self.ir.declare_action(name);
        self.ir.reset_action(id);
        self.bodies
            .insert(id, Rc::new(move |b| body(b).into_return_values()));
        id
    }

    /// Returns the action's captured statement sequence, playing the body
    /// first if it never ran.
    fn build(&mut self, id: ActionId) -> Result<Vec<StmtId>, ModelError> {
        if let Some(stmts) = &self.ir.actions[id].stmts {
            return Ok(stmts.clone());
        }
        let body = match self.bodies.get(&id) {
            Some(body) => Rc::clone(body),
            None => {
                let name = self.interner.resolve(self.ir.actions[id].name).to_owned();
                return Err(ModelError::UnknownAction(name));
            }
        };
        let mut builder = ActionBuilder::new(&mut self.ir);
        let ret_values = body(&mut builder);
        if !ret_values.is_empty() {
            builder.ret(ret_values);
        }
        let (stmts, conditions) = builder.finish();
        self.ir.record_action(id, stmts.clone(), conditions);
        Ok(stmts)
    }

    /// Invokes an action by ID.
    pub fn run_action(&mut self, id: ActionId) -> Result<ActionResult, ModelError> {
        let stmts = self.build(id)?;
        let mut evaluator = Evaluator {
            ir: &self.ir,
            state: &mut self.state,
        };
        let payload = evaluator.run(&stmts)?;
        Ok(ActionResult::from_payload(payload))
    }

    /// Invokes an action by name.
    pub fn invoke(&mut self, name: &str) -> Result<ActionResult, ModelError> {
        let id = self
            .interner
            .get(name)
            .and_then(|ident| self.ir.find_action(ident))
            .ok_or_else(|| ModelError::UnknownAction(name.to_owned()))?;
        self.run_action(id)
    }

    /// Resolves a name across all registries.
    ///
    /// Actions shadow ports, ports shadow variables, and variables shadow
    /// named constants.
    pub fn lookup(&self, name: &str) -> Resolved {
        let Some(ident) = self.interner.get(name) else {
            return Resolved::NotFound;
        };
        if let Some(id) = self.ir.find_action(ident) {
            return Resolved::Action(id);
        }
        if let Some(id) = self.ir.find_port(ident) {
            return Resolved::Port(id);
        }
        if let Some(id) = self.ir.find_var(ident) {
            return Resolved::Variable(id);
        }
        if let Some(id) = self.ir.find_const(ident) {
            return Resolved::Const(id);
        }
        Resolved::NotFound
    }

    /// Reads a name: invokes it if it is an action, otherwise returns the
    /// entity's current (or constant) value.
    pub fn read(&mut self, name: &str) -> Result<ActionResult, ModelError> {
        match self.lookup(name) {
            Resolved::Action(id) => self.run_action(id),
            Resolved::Port(id) => Ok(ActionResult::Scalar(self.state.port(id))),
            Resolved::Variable(id) => Ok(ActionResult::Scalar(self.state.var(id))),
            Resolved::Const(id) => Ok(ActionResult::Scalar(self.ir.consts[id].value)),
            Resolved::NotFound => Err(ModelError::UnknownName(name.to_owned())),
        }
    }

    /// Writes a name's cell directly, outside any action.
    ///
    /// Ports shadow variables; actions and constants are not writable.
    pub fn write(&mut self, name: &str, value: i64) -> Result<(), ModelError> {
        match self.lookup(name) {
            Resolved::Port(id) => {
                self.state.set_port(id, value);
                Ok(())
            }
            Resolved::Variable(id) => {
                self.state.set_var(id, value);
                Ok(())
            }
            Resolved::Action(_) | Resolved::Const(_) => {
                Err(ModelError::NotWritable(name.to_owned()))
            }
            Resolved::NotFound => Err(ModelError::UnknownName(name.to_owned())),
        }
    }

    /// The captured statement sequence of an action, playing the body first
    /// if needed. Does not evaluate anything.
    pub fn statements(&mut self, name: &str) -> Result<Vec<StmtId>, ModelError> {
        let id = self
            .interner
            .get(name)
            .and_then(|ident| self.ir.find_action(ident))
            .ok_or_else(|| ModelError::UnknownAction(name.to_owned()))?;
        self.build(id)
    }

    /// The advisory guard expressions of an action, playing the body first
    /// if needed.
    pub fn conditions(&mut self, name: &str) -> Result<Vec<ExprId>, ModelError> {
        let id = self
            .interner
            .get(name)
            .and_then(|ident| self.ir.find_action(ident))
            .ok_or_else(|| ModelError::UnknownAction(name.to_owned()))?;
        self.build(id)?;
        Ok(self.ir.actions[id].conditions.clone())
    }

    /// Whether all of an action's guard conditions currently hold.
    ///
    /// An action with no guards trivially holds.
    pub fn conditions_hold(&mut self, name: &str) -> Result<bool, ModelError> {
        let conditions = self.conditions(name)?;
        let evaluator = Evaluator {
            ir: &self.ir,
            state: &mut self.state,
        };
        for condition in conditions {
            if evaluator.eval_expr(condition)? == 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Plays every registered body that has not run yet, so the full IR of
    /// all actions is captured. Does not evaluate anything.
    pub fn produce_statements(&mut self) -> Result<(), ModelError> {
        let ids: Vec<ActionId> = self.ir.actions.values().map(|a| a.id).collect();
        for id in ids {
            self.build(id)?;
        }
        Ok(())
    }

    /// Renders an action's captured statement sequence, one statement per
    /// line, playing the body first if needed.
    pub fn render_action(&mut self, name: &str) -> Result<String, ModelError> {
        let stmts = self.statements(name)?;
        let lines: Vec<String> = stmts
            .iter()
            .map(|s| crate::render::render_stmt(&self.ir, &self.interner, *s))
            .collect();
        Ok(lines.join("\n"))
    }

    /// Names of all defined actions, in definition order.
    pub fn action_names(&self) -> Vec<String> {
        self.ir
            .actions
            .values()
            .map(|a| self.interner.resolve(a.name).to_owned())
            .collect()
    }

    /// Current value of a declared variable.
    pub fn var_value(&self, id: VarId) -> i64 {
        self.state.var(id)
    }

    /// Current value of a declared port.
    pub fn port_value(&self, id: PortId) -> i64 {
        self.state.port(id)
    }

    /// The model's retained IR.
    pub fn ir(&self) -> &ModelIr {
        &self.ir
    }

    /// The model's name interner.
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// The model's live state.
    pub fn state(&self) -> &ModelState {
        &self.state
    }

    /// Mutable access to the live state, for test harnesses that poke
    /// memory directly.
    pub fn state_mut(&mut self) -> &mut ModelState {
        &mut self.state
    }
}
