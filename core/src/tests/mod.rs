mod integer_only_gate;
