// Records the server starts with unless seeding is disabled

use crate::models::User;

pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "João Silva", "joao.silva@email.com")
            .with_idade(28)
            .with_telefone("(11) 98765-4321")
            .with_cidade("São Paulo"),
        User::new(2, "Maria Santos", "maria.santos@email.com")
            .with_idade(34)
            .with_telefone("(21) 99876-5432")
            .with_cidade("Rio de Janeiro"),
        User::new(3, "Pedro Oliveira", "pedro.oliveira@email.com")
            .with_idade(45)
            .with_telefone("(31) 97654-3210")
            .with_cidade("Belo Horizonte"),
        User::new(4, "Ana Costa", "ana.costa@email.com")
            .with_idade(23)
            .with_telefone("(41) 96543-2109")
            .with_cidade("Curitiba"),
        User::new(5, "Carlos Pereira", "carlos.pereira@email.com")
            .with_idade(52)
            .with_telefone("(51) 95432-1098")
            .with_cidade("Porto Alegre"),
    ]
}
