mod decision_properties;
