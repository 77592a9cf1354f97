use std::cell::Cell;

use serde_json::{Map, Value as JsonValue};

use crate::codec::{EncodeError, Result};

/// Bytes charged for every array element or object member created.
pub const NODE_COST: usize = 16;

/// Shared placeholder read for missing object members.
pub(crate) static NULL: JsonValue = JsonValue::Null;

/// Remaining write capacity of one destination document.
///
/// Mirrors a fixed-size firmware JSON pool: nodes and copied strings draw
/// from it, clearing a node gives nothing back.
#[derive(Debug)]
pub struct Budget {
	remaining: Cell<usize>,
	bounded: bool,
}

impl Budget {
	/// Budget of `capacity` bytes.
	pub fn new(capacity: usize) -> Self {
		Self {
			remaining: Cell::new(capacity),
			bounded: true,
		}
	}

	/// Budget that never runs out.
	pub fn unbounded() -> Self {
		Self {
			remaining: Cell::new(usize::MAX),
			bounded: false,
		}
	}

	/// Bytes left, or `None` when unbounded.
	pub fn remaining(&self) -> Option<usize> {
		self.bounded.then(|| self.remaining.get())
	}

	fn take(&self, need: usize) -> Result<()> {
		if !self.bounded {
			return Ok(());
		}

		let remaining = self.remaining.get();
		if need > remaining {
			return Err(EncodeError::CapacityExceeded { need, remaining });
		}
		self.remaining.set(remaining - need);
		Ok(())
	}
}

/// Destination document: a JSON tree plus its write budget.
#[derive(Debug)]
pub struct Document {
	root: JsonValue,
	budget: Budget,
}

impl Document {
	/// Empty document limited to `capacity` bytes.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			root: JsonValue::Null,
			budget: Budget::new(capacity),
		}
	}

	/// Empty document without a size limit.
	pub fn unbounded() -> Self {
		Self {
			root: JsonValue::Null,
			budget: Budget::unbounded(),
		}
	}

	/// Wrap an existing tree, leaving `capacity` bytes for further writes.
	pub fn from_json(root: JsonValue, capacity: Option<usize>) -> Self {
		Self {
			root,
			budget: capacity.map_or_else(Budget::unbounded, Budget::new),
		}
	}

	/// Read-only view of the root node.
	pub fn root(&self) -> &JsonValue {
		&self.root
	}

	/// Writable handle on the root node.
	pub fn slot(&mut self) -> Slot<'_> {
		Slot {
			node: &mut self.root,
			budget: &self.budget,
		}
	}

	/// Bytes left, or `None` when unbounded.
	pub fn remaining(&self) -> Option<usize> {
		self.budget.remaining()
	}

	/// Consume the document and return its tree.
	pub fn into_json(self) -> JsonValue {
		self.root
	}
}

/// Writable handle on one node of a [`Document`].
#[derive(Debug)]
pub struct Slot<'a> {
	node: &'a mut JsonValue,
	budget: &'a Budget,
}

impl<'a> Slot<'a> {
	/// Pair a node with the budget it draws from.
	pub fn new(node: &'a mut JsonValue, budget: &'a Budget) -> Self {
		Self { node, budget }
	}

	/// Current node contents.
	pub fn get(&self) -> &JsonValue {
		self.node
	}

	/// Reset the node to null.
	pub fn set_null(&mut self) {
		*self.node = JsonValue::Null;
	}

	/// Store a boolean.
	pub fn set_bool(&mut self, value: bool) -> Result<()> {
		*self.node = JsonValue::Bool(value);
		Ok(())
	}

	/// Store an unsigned integer.
	pub fn set_u64(&mut self, value: u64) -> Result<()> {
		*self.node = JsonValue::from(value);
		Ok(())
	}

	/// Store a signed integer.
	pub fn set_i64(&mut self, value: i64) -> Result<()> {
		*self.node = JsonValue::from(value);
		Ok(())
	}

	/// Store a copy of `value`, charging its length plus terminator.
	pub fn set_str(&mut self, value: &str) -> Result<()> {
		self.budget.take(value.len() + 1)?;
		*self.node = JsonValue::String(value.to_owned());
		Ok(())
	}

	/// Replace the node with an empty array.
	pub fn to_array(&mut self) {
		*self.node = JsonValue::Array(Vec::new());
	}

	/// Replace the node with an empty object.
	pub fn to_object(&mut self) {
		*self.node = JsonValue::Object(Map::new());
	}

	/// Append a null element and return a handle on it.
	///
	/// A non-array node is turned into an empty array first.
	pub fn push(&mut self) -> Result<Slot<'_>> {
		self.budget.take(NODE_COST)?;
		let items = ensure_array(self.node);
		items.push(JsonValue::Null);
		let last = items.len() - 1;
		Ok(Slot {
			node: &mut items[last],
			budget: self.budget,
		})
	}

	/// Handle on the member `name`, inserting a null member when missing.
	///
	/// A non-object node is turned into an empty object first.
	pub fn member(&mut self, name: &str) -> Result<Slot<'_>> {
		let budget = self.budget;
		let map = ensure_object(self.node);
		if !map.contains_key(name) {
			budget.take(NODE_COST + name.len() + 1)?;
		}
		let node = map.entry(name.to_owned()).or_insert(JsonValue::Null);
		Ok(Slot { node, budget })
	}
}

fn ensure_array(node: &mut JsonValue) -> &mut Vec<JsonValue> {
	if !node.is_array() {
		*node = JsonValue::Array(Vec::new());
	}
	match node {
		JsonValue::Array(items) => items,
		_ => unreachable!("node was replaced by an array"),
	}
}

fn ensure_object(node: &mut JsonValue) -> &mut Map<String, JsonValue> {
	if !node.is_object() {
		*node = JsonValue::Object(Map::new());
	}
	match node {
		JsonValue::Object(map) => map,
		_ => unreachable!("node was replaced by an object"),
	}
}
