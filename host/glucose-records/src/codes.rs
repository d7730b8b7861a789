//! Assigned codes of the measurement and context records

assigned_code! {
    /// The kind of sample that was measured
    pub enum SampleType {
        CapillaryWholeBlood = 1 => "capillary whole blood",
        CapillaryPlasma = 2 => "capillary plasma",
        VenousWholeBlood = 3 => "venous whole blood",
        VenousPlasma = 4 => "venous plasma",
        ArterialWholeBlood = 5 => "arterial whole blood",
        ArterialPlasma = 6 => "arterial plasma",
        UndeterminedWholeBlood = 7 => "undetermined whole blood",
        UndeterminedPlasma = 8 => "undetermined plasma",
        InterstitialFluid = 9 => "interstitial fluid",
        ControlSolution = 10 => "control solution",
    }
}

assigned_code! {
    /// Where the sample was taken
    pub enum SampleLocation {
        Finger = 1 => "finger",
        AlternateSiteTest = 2 => "alternate site test",
        Earlobe = 3 => "earlobe",
        ControlSolution = 4 => "control solution",
        NotAvailable = 15 => "not available",
    }
}

assigned_code! {
    pub enum CarbohydrateId {
        Breakfast = 1 => "breakfast",
        Lunch = 2 => "lunch",
        Dinner = 3 => "dinner",
        Snack = 4 => "snack",
        Drink = 5 => "drink",
        Supper = 6 => "supper",
        Brunch = 7 => "brunch",
    }
}

assigned_code! {
    /// Relation of the measurement to a meal
    pub enum Meal {
        Preprandial = 1 => "preprandial",
        Postprandial = 2 => "postprandial",
        Fasting = 3 => "fasting",
        Casual = 4 => "casual",
        Bedtime = 5 => "bedtime",
    }
}

assigned_code! {
    /// Who performed the test
    pub enum Tester {
        SelfTest = 1 => "self",
        HealthCareProfessional = 2 => "health care professional",
        LabTest = 3 => "lab test",
        NotAvailable = 15 => "not available",
    }
}

assigned_code! {
    pub enum Health {
        MinorHealthIssues = 1 => "minor health issues",
        MajorHealthIssues = 2 => "major health issues",
        DuringMenses = 3 => "during menses",
        UnderStress = 4 => "under stress",
        NoHealthIssues = 5 => "no health issues",
        NotAvailable = 15 => "not available",
    }
}

assigned_code! {
    pub enum MedicationId {
        RapidActingInsulin = 1 => "rapid acting insulin",
        ShortActingInsulin = 2 => "short acting insulin",
        IntermediateActingInsulin = 3 => "intermediate acting insulin",
        LongActingInsulin = 4 => "long acting insulin",
        PreMixedInsulin = 5 => "pre-mixed insulin",
    }
}
