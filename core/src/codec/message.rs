use std::any::Any;
use std::fmt::Debug;


/// A value the codec can write and hand back as a decode result.
///
/// Usually implemented with `#[derive(Message)]`.
pub trait Message: erased_serde::Serialize + Debug + Send + Sync + 'static {
  fn eq_message(&self, other: &dyn Message) -> bool;
  fn as_any(&self) -> &(dyn Any + Send + Sync + 'static);

  fn get_type_name(&self) -> String;
}

impl dyn Message {
  pub fn is<T: Message>(&self) -> bool {
    self.as_any().is::<T>()
  }

  pub fn downcast_ref<T: Message>(&self) -> Option<&T> {
    self.as_any().downcast_ref::<T>()
  }
}

impl PartialEq for dyn Message {
  fn eq(&self, other: &Self) -> bool {
    self.eq_message(other)
  }
}

macro_rules! impl_message {
  ($($ty:ty),*) => {
    $(
      impl Message for $ty {
        fn eq_message(&self, other: &dyn Message) -> bool {
          match other.as_any().downcast_ref::<$ty>() {
            Some(other) => self == other,
            _ => false,
          }
        }

        fn as_any(&self) -> &(dyn Any + Send + Sync + 'static) {
          self
        }

        fn get_type_name(&self) -> String {
          std::any::type_name_of_val(self).to_string()
        }
      }
    )*
  };
}

impl_message!(String, serde_json::Value);
