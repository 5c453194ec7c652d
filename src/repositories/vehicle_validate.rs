use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::RepositoryError;

/// Validar los campos obligatorios de un vehículo.
///
/// Solo el identificador es obligatorio: un `id` igual a cero se rechaza.
/// El resto de campos se acepta tal cual, incluso vacío.
pub fn validate_mandatory_fields(vehicle: &Vehicle) -> Result<(), RepositoryError> {
    if vehicle.id == 0 {
        return Err(RepositoryError::MissingFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_id_is_rejected() {
        let vehicle = Vehicle::new(
            0,
            "Toyota",
            "Corolla",
            "ABC-1234",
            "Blue",
            2020,
            5,
            180.0,
            "Gasoline",
            "Automatic",
            1300.0,
            1.45,
            4.62,
            1.77,
        );
        assert_eq!(validate_mandatory_fields(&vehicle), Err(RepositoryError::MissingFields));
    }

    #[test]
    fn test_empty_fields_are_accepted() {
        let vehicle = Vehicle::new(-7, "", "", "", "", 0, 0, 0.0, "", "", 0.0, 0.0, 0.0, 0.0);
        assert!(validate_mandatory_fields(&vehicle).is_ok());
    }
}
