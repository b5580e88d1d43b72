quantity!(KilowattHourRate, "₹/kWh");
