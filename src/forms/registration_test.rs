#[cfg(test)]
mod registration_tests {
    use crate::error::FormError;
    use crate::forms::registration::{RegistrationField, RegistrationForm, RegistrationStep, Role};
    use crate::services::password::RegistrationStrength;
    use crate::services::workflow::FormController;

    #[test]
    fn test_role_selection_advances_to_details() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.step(), RegistrationStep::RoleSelection);
        assert_eq!(form.step().number(), 1);

        form.select_role(Role::User).unwrap();

        assert_eq!(form.step(), RegistrationStep::DetailsEntry(Role::User));
        assert_eq!(form.step().number(), 2);
    }

    #[test]
    fn test_unrelated_inputs_do_not_revert_step() {
        let mut form = RegistrationForm::new();
        form.select_role(Role::Helper).unwrap();

        for field in RegistrationField::ALL {
            form.apply_input(*field, "").unwrap();
        }
        form.validate();

        assert_eq!(form.step(), RegistrationStep::DetailsEntry(Role::Helper));
    }

    #[test]
    fn test_no_second_role_selection() {
        let mut form = RegistrationForm::new();
        form.select_role(Role::Helper).unwrap();

        assert_eq!(
            form.select_role(Role::User),
            Err(FormError::WrongStep("details-entry"))
        );
        assert_eq!(form.step().role(), Some(Role::Helper));
    }

    #[test]
    fn test_details_rejected_before_role() {
        let mut form = RegistrationForm::new();
        assert_eq!(
            form.apply_input(RegistrationField::Name, "Ravi"),
            Err(FormError::WrongStep("role-selection"))
        );
        assert_eq!(form.record().name, "");
    }

    #[test]
    fn test_required_messages() {
        let mut form = RegistrationForm::new();
        form.select_role(Role::User).unwrap();
        form.apply_input(RegistrationField::Name, "   ").unwrap();

        assert!(!form.validate());
        let errors = form.errors();
        assert_eq!(errors.get(RegistrationField::Name), Some("Name is required"));
        assert_eq!(errors.get(RegistrationField::Email), Some("Email is required"));
        assert_eq!(errors.get(RegistrationField::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(RegistrationField::Password), Some("Password is required"));
        assert_eq!(errors.get(RegistrationField::City), Some("City is required"));
        assert_eq!(errors.get(RegistrationField::State), Some("State is required"));
        assert_eq!(errors.get(RegistrationField::Pincode), Some("Pincode is required"));
    }

    #[test]
    fn test_password_checks_in_order() {
        let mut form = RegistrationForm::new();
        form.select_role(Role::User).unwrap();

        let cases = [
            ("Ab!", "Minimum 8 characters"),
            ("abcdefg!", "Include uppercase letter"),
            ("Abcdefgh", "Include special character"),
        ];
        for (password, message) in cases {
            form.apply_input(RegistrationField::Password, password).unwrap();
            form.validate();
            assert_eq!(form.errors().get(RegistrationField::Password), Some(message));
        }

        form.apply_input(RegistrationField::Password, "Abcdefg!").unwrap();
        form.validate();
        assert!(!form.errors().contains(RegistrationField::Password));
    }

    #[test]
    fn test_password_strength_follows_each_keystroke() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.password_strength(), RegistrationStrength::Weak);
        form.select_role(Role::User).unwrap();

        let typed = [
            ("A", RegistrationStrength::Weak),
            ("Abcdefgh", RegistrationStrength::Medium),
            ("Abcdefgh!", RegistrationStrength::Strong),
            ("abcdefgh!", RegistrationStrength::Medium),
            ("abcdefgh", RegistrationStrength::Weak),
        ];
        for (password, strength) in typed {
            form.apply_input(RegistrationField::Password, password).unwrap();
            assert_eq!(form.password_strength(), strength, "{password}");
        }

        // Other fields leave the meter alone
        form.apply_input(RegistrationField::Password, "Abcdefg!").unwrap();
        form.apply_input(RegistrationField::Name, "Ravi").unwrap();
        assert_eq!(form.password_strength(), RegistrationStrength::Strong);
    }

    #[test]
    fn test_format_messages() {
        let mut form = RegistrationForm::new();
        form.select_role(Role::User).unwrap();
        form.apply_named_input("email", "a@b").unwrap();
        form.apply_named_input("phone", "12345").unwrap();
        form.apply_named_input("pincode", "4110").unwrap();

        form.validate();

        assert_eq!(form.errors().get(RegistrationField::Email), Some("Invalid email format"));
        assert_eq!(form.errors().get(RegistrationField::Phone), Some("Must be 10 digits"));
        assert_eq!(
            form.errors().get(RegistrationField::Pincode),
            Some("Invalid 6-digit pincode")
        );

        form.apply_named_input("phone", "1234567890").unwrap();
        assert!(!form.errors().contains(RegistrationField::Phone));
        assert!(form.errors().contains(RegistrationField::Email));
    }

    #[test]
    fn test_role_parses_from_label() {
        assert_eq!("Helper".parse::<Role>(), Ok(Role::Helper));
        assert!("Admin".parse::<Role>().is_err());
    }
}
