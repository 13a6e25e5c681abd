use crate::codec::message_type::DecodeFn;
use crate::codec::{Message, MessageType, RegistryError};
use serde::de::DeserializeOwned;
use std::any::TypeId;
use std::collections::{BTreeSet, HashMap};


#[derive(Debug)]
struct Registration {
  name: &'static str,
  type_id: TypeId,
  decode: DecodeFn,
  direct_supertypes: BTreeSet<TypeId>,
}

/// Collects message types and their declared supertype relations at startup.
#[derive(Debug, Default)]
pub struct MessageTypeRegistryBuilder {
  registrations: Vec<Registration>,
  index: HashMap<TypeId, usize>,
}

impl MessageTypeRegistryBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register<T>(&mut self) -> Result<&mut Self, RegistryError>
  where
    T: Message + DeserializeOwned, {
    let type_id = TypeId::of::<T>();
    let name = std::any::type_name::<T>();
    if self.index.contains_key(&type_id) {
      return Err(RegistryError::DuplicateMessageType(name.to_string()));
    }
    tracing::debug!("Registering message type: name = {}", name);
    self.index.insert(type_id, self.registrations.len());
    self.registrations.push(Registration {
      name,
      type_id,
      decode: MessageType::decoder_of::<T>(),
      direct_supertypes: BTreeSet::new(),
    });
    Ok(self)
  }

  /// Declares `B` as a supertype of `D`, e.g. a contract `D` also implements.
  pub fn declare_supertype<D: 'static, B: 'static>(&mut self) -> Result<&mut Self, RegistryError> {
    let derived_name = std::any::type_name::<D>();
    let base_name = std::any::type_name::<B>();
    let derived = self.position_of(TypeId::of::<D>(), derived_name)?;
    let base = self.position_of(TypeId::of::<B>(), base_name)?;
    if derived == base {
      return Err(RegistryError::InvalidRelation(format!(
        "{} cannot be its own supertype",
        derived_name
      )));
    }
    if self.reaches(base, TypeId::of::<D>()) {
      return Err(RegistryError::InvalidRelation(format!(
        "{} is already a supertype of {}",
        derived_name, base_name
      )));
    }
    tracing::debug!(
      "Declaring supertype: derived = {}, base = {}",
      derived_name,
      base_name
    );
    self.registrations[derived].direct_supertypes.insert(TypeId::of::<B>());
    Ok(self)
  }

  pub fn build(&self) -> MessageTypeRegistry {
    let message_types = (0..self.registrations.len())
      .map(|position| {
        let registration = &self.registrations[position];
        MessageType::new(
          registration.name,
          registration.type_id,
          registration.decode,
          self.closure_of(position),
        )
      })
      .collect::<Vec<_>>();
    let by_name = message_types
      .iter()
      .enumerate()
      .map(|(position, message_type)| (message_type.name(), position))
      .collect();
    MessageTypeRegistry {
      message_types,
      by_type_id: self.index.clone(),
      by_name,
    }
  }

  fn position_of(&self, type_id: TypeId, name: &str) -> Result<usize, RegistryError> {
    self
      .index
      .get(&type_id)
      .copied()
      .ok_or_else(|| RegistryError::UnknownMessageType(name.to_string()))
  }

  fn reaches(&self, from: usize, target: TypeId) -> bool {
    self.closure_of(from).contains(&target)
  }

  fn closure_of(&self, position: usize) -> BTreeSet<TypeId> {
    let mut closure = BTreeSet::new();
    let mut pending = self.registrations[position]
      .direct_supertypes
      .iter()
      .copied()
      .collect::<Vec<_>>();
    while let Some(type_id) = pending.pop() {
      if !closure.insert(type_id) {
        continue;
      }
      if let Some(&next) = self.index.get(&type_id) {
        pending.extend(self.registrations[next].direct_supertypes.iter().copied());
      }
    }
    closure
  }
}

/// Immutable set of message type descriptors with their supertype closures resolved.
#[derive(Debug, Clone, Default)]
pub struct MessageTypeRegistry {
  message_types: Vec<MessageType>,
  by_type_id: HashMap<TypeId, usize>,
  by_name: HashMap<&'static str, usize>,
}

impl MessageTypeRegistry {
  pub fn builder() -> MessageTypeRegistryBuilder {
    MessageTypeRegistryBuilder::new()
  }

  pub fn len(&self) -> usize {
    self.message_types.len()
  }

  pub fn is_empty(&self) -> bool {
    self.message_types.is_empty()
  }

  pub fn message_type<T: 'static>(&self) -> Result<MessageType, RegistryError> {
    self
      .by_type_id
      .get(&TypeId::of::<T>())
      .map(|&position| self.message_types[position].clone())
      .ok_or_else(|| RegistryError::UnknownMessageType(std::any::type_name::<T>().to_string()))
  }

  pub fn by_type_id(&self, type_id: TypeId) -> Option<MessageType> {
    self
      .by_type_id
      .get(&type_id)
      .map(|&position| self.message_types[position].clone())
  }

  pub fn by_name(&self, name: &str) -> Option<MessageType> {
    self
      .by_name
      .get(name)
      .map(|&position| self.message_types[position].clone())
  }

  /// `T` followed by all of its registered supertypes, most-derived first.
  ///
  /// A type always has more supertypes than any of its own supertypes, so ordering by descending
  /// supertype count (ties by registration order) puts every type before its bases.
  pub fn message_types_for<T: 'static>(&self) -> Result<Vec<MessageType>, RegistryError> {
    let message_type = self.message_type::<T>()?;
    let mut supertypes = message_type
      .supertypes()
      .filter_map(|type_id| self.by_type_id.get(&type_id).copied())
      .collect::<Vec<_>>();
    supertypes.sort_by(|left, right| {
      let left_count = self.message_types[*left].supertype_count();
      let right_count = self.message_types[*right].supertype_count();
      right_count.cmp(&left_count).then(left.cmp(right))
    });
    let mut result = Vec::with_capacity(supertypes.len() + 1);
    result.push(message_type);
    result.extend(
      supertypes
        .into_iter()
        .map(|position| self.message_types[position].clone()),
    );
    Ok(result)
  }

  pub fn iter(&self) -> impl Iterator<Item = &MessageType> {
    self.message_types.iter()
  }
}
