//! Utilidades de validación
//!
//! La única validación que hace el formulario es quitar todo lo que no
//! sea un dígito de los campos numéricos antes de enviarlos.

/// Quitar en el sitio cualquier carácter que no sea un dígito ASCII,
/// esté donde esté
pub fn sanitize_in_place(value: &mut String) {
    value.retain(|c| c.is_ascii_digit());
}
