use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Implements `Message` for a type that is `PartialEq + Serialize + Debug + Send + Sync + 'static`.
///
/// The generated impl names the trait by its full path, so it does not need to be imported at the
/// derive site.
#[proc_macro_derive(Message)]
pub fn derive_message(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  TokenStream::from(expand_message(&input))
}

fn message_trait() -> proc_macro2::TokenStream {
  quote!(::nexus_json_codec_rs::Message)
}

fn expand_message(input: &DeriveInput) -> proc_macro2::TokenStream {
  let name = &input.ident;
  let message = message_trait();
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

  quote! {
      impl #impl_generics #message for #name #ty_generics #where_clause {
          fn eq_message(&self, other: &dyn #message) -> bool {
              #message::as_any(other)
                  .downcast_ref::<Self>()
                  .map_or(false, |other| self == other)
          }

          fn as_any(&self) -> &(dyn ::std::any::Any + Send + Sync + 'static) {
              self
          }

          fn get_type_name(&self) -> String {
              ::std::any::type_name_of_val(self).to_string()
          }
      }
  }
}
