mod movement;
