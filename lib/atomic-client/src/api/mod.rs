//! Entity operations of the Atomic API.
//!
//! Every operation is a thin wrapper around [`AtomicClient::dispatch`](crate::AtomicClient::dispatch): one verb, one path
//! template, one input type, one output type. The wrappers are generated from a table with the
//! `operations!` macro, only the file uploads and the token creation are written by hand.

mod table;
mod uploads;

/// Generates entity operations on [`AtomicClient`](crate::AtomicClient).
///
/// Each entry reads `fn name(Input) -> Output = VERB "template", field, ...;` where every
/// `field` of the input is substituted into the `{field}` placeholder of the template.
/// Without `-> Output`, the operation is void and the response body is ignored.
///
/// The generated signature is
/// `async fn name(&self, params: &RequestParams, input: &Input) -> Result<Output, AtomicError>`.
macro_rules! operations {
    ($(
        $(#[$meta:meta])*
        fn $name:ident($input:ty) $(-> $output:ty)? = $verb:ident $template:literal $(, $field:ident)* ;
    )*) => {
        impl $crate::AtomicClient {$(
            $(#[$meta])*
            ///
            /// # Errors
            ///
            /// See [`AtomicError`](crate::AtomicError).
            pub async fn $name(
                &self,
                params: &$crate::RequestParams,
                input: &$input,
            ) -> Result<operations!(@output $($output)?), $crate::AtomicError> {
                let path = $crate::CallPath::from($template)
                    $(.add_param(stringify!($field), &input.$field))*;
                operations!(@dispatch [$($output)?] self, http::Method::$verb, path, params, input)
            }
        )*}
    };

    (@output) => { () };
    (@output $output:ty) => { $output };

    (@dispatch [] $client:ident, $method:expr, $path:ident, $params:ident, $input:ident) => {
        $client.dispatch_void($method, $path, $params, $input).await
    };
    (@dispatch [$output:ty] $client:ident, $method:expr, $path:ident, $params:ident, $input:ident) => {
        $client.dispatch::<$output>($method, $path, $params, $input).await
    };
}
use operations;
