#[cfg(test)]
mod booking_tests {
    use chrono::NaiveDate;

    use crate::error::FormError;
    use crate::forms::booking::{BookingField, BookingForm};
    use crate::models::catalog::{Location, Service, Worker};
    use crate::services::workflow::FormController;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn test_defaults() {
        let form = BookingForm::new(today());
        let record = form.record();

        assert_eq!(record.date, Some(today()));
        assert_eq!(record.time.hour, "12");
        assert_eq!(record.time.minute, "00");
        assert_eq!(record.time.period, "AM");
        assert_eq!(record.location, Location::Pune);
        assert_eq!(record.service, Service::Cleaning);
        assert_eq!(record.worker, Worker::Helper1);
        assert!(form.errors().is_empty());
        assert!(form.preview().is_none());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_editing_a_field_clears_only_its_error() {
        let mut form = BookingForm::new(today());
        assert!(!form.validate());
        assert!(form.errors().contains(BookingField::Email));
        assert!(form.errors().contains(BookingField::Phone));

        form.apply_input(BookingField::Email, "still wrong").unwrap();

        assert!(!form.errors().contains(BookingField::Email));
        assert!(form.errors().contains(BookingField::Phone));
    }

    #[test]
    fn test_time_parts_clear_time_error() {
        let mut form = BookingForm::new(today());
        form.apply_input(BookingField::Period, "").unwrap();
        form.validate();
        assert_eq!(
            form.errors().get(BookingField::Time),
            Some("Please select a valid time")
        );

        form.apply_input(BookingField::Period, "PM").unwrap();
        assert!(!form.errors().contains(BookingField::Time));
        assert_eq!(form.record().time.label(), "12:00 PM");
    }

    #[test]
    fn test_combined_time_input() {
        let mut form = BookingForm::new(today());
        form.apply_input(BookingField::Time, "07:05 PM").unwrap();
        assert_eq!(form.record().time.hour, "07");
        assert_eq!(form.record().time.minute, "05");
        assert_eq!(form.record().time.period, "PM");

        form.apply_input(BookingField::Time, "seven").unwrap();
        assert_eq!(form.record().time.hour, "");
        form.validate();
        assert!(form.errors().contains(BookingField::Time));
    }

    #[test]
    fn test_unparsable_date_reads_as_unselected() {
        let mut form = BookingForm::new(today());
        form.apply_input(BookingField::Date, "14/10/2026").unwrap();
        assert_eq!(form.record().date, None);

        form.validate();
        assert_eq!(
            form.errors().get(BookingField::Date),
            Some("Please select a valid date")
        );
    }

    #[test]
    fn test_catalog_selections() {
        let mut form = BookingForm::new(today());
        form.apply_named_input("location", "Nashik").unwrap();
        form.apply_named_input("service", "Pet Care").unwrap();
        form.apply_named_input("worker", "Helper 2").unwrap();

        assert_eq!(form.record().location, Location::Nashik);
        assert_eq!(form.record().service, Service::PetCare);
        assert_eq!(form.record().worker, Worker::Helper2);

        assert_eq!(
            form.apply_named_input("location", "Delhi"),
            Err(FormError::UnknownOption {
                field: "location",
                value: "Delhi".to_string()
            })
        );
        assert_eq!(form.record().location, Location::Nashik);
        assert_eq!(
            form.apply_named_input("budget", "500"),
            Err(FormError::UnknownField("budget".to_string()))
        );
    }

    #[test]
    fn test_preview_shows_pending_payload() {
        let mut form = BookingForm::new(today());
        form.apply_input(BookingField::Name, "Asha Patil").unwrap();

        form.show_preview();
        let preview = form.preview().unwrap();
        assert_eq!(preview.form_data.name, "Asha Patil");
        assert_eq!(preview.selected_time, "12:00 AM");
        assert_eq!(preview.selected_date, Some(today()));

        form.hide_preview();
        assert!(form.preview().is_none());
    }
}
