/// Create an enum of form fields that can be iterated over with
/// tab/shift-tab. Each variant gets the element id the form handlers read it
/// by, a label to show, and whether its contents should be masked.
#[macro_export]
macro_rules! form_fields {
    ($name:ident, $($variant:ident($id:expr, $label:literal, $masked:literal)),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),*
        }

        impl $crate::app::form::FormField for $name {
            const FIELDS: &'static [$name] = &[
                $($name::$variant),*
            ];

            fn index(self) -> usize {
                self as usize
            }

            fn id(self) -> &'static str {
                match self {
                    $(Self::$variant => $id),*
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn masked(self) -> bool {
                match self {
                    $(Self::$variant => $masked),*
                }
            }
        }
    };
}
