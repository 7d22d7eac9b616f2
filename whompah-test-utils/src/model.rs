pub type PlayerModel = entity::player::Model;
