pub const QUIZ_PT_HELPER: &'static str =

"
                                Como Jogar \n
O objetivo do jogo é balancear equações químicas. Uma equação está balanceada quando o número de átomos de cada \n
elemento é o mesmo nos reagentes (lado esquerdo) e nos produtos (lado direito). \n
1) Escolha a Dificuldade: comece selecionando um nível: Fácil, Médio ou Difícil. \n
2) Insira os Coeficientes: digite os números (coeficientes) nas caixas em branco para balancear a equação. \n
Você não pode usar o número zero, números negativos ou frações - apenas inteiros positivos. Uma caixa em branco \n
nunca é aceita como resposta. \n
3) Use a Dica: a opção 'Dica' mostra a tabela de Contagem de Átomos. Ela mostra quantos átomos de cada elemento \n
existem em cada lado da equação com os coeficientes atuais (uma caixa em branco conta como 1 na tabela). \n
A linha fica vermelha se a contagem estiver desbalanceada. \n
4) Verifique sua Resposta: quando achar que a equação está correta, escolha 'Verificar'. \n
5) Ganhe Pontos: você ganha pontos por resolver equações sem usar a 'Dica' ou o 'Resolver'. \n
Fácil vale 10 pontos, Médio vale 20 e Difícil vale 30. O placar mostra quantas equações de cada nível \n
você resolveu sem ajuda. \n
6) Próximo Desafio: escolha 'Próxima' para carregar uma nova equação. Com o avanço automático ligado, \n
a próxima equação é carregada logo depois de uma resposta correta. \n
7) Histórico: as últimas 30 equações ficam registradas como Resolvido, Resolvido com Dica ou Revelado. \n
";

pub const QUIZ_ENG_HELPER: &'static str =

"
                                How to play \n
The goal is to balance chemical equations. An equation is balanced when the number of atoms of every element \n
is the same on the reactant side (left) and on the product side (right). \n
1) Pick a difficulty: easy, medium or hard. \n
2) Enter the coefficients: type whole positive integers into the blank boxes. Zero, negative numbers and \n
fractions are rejected, and a blank box is never accepted as an answer. \n
3) Use the hint: the 'Dica' option shows the atom count table - how many atoms of each element each side \n
currently has (a blank box counts as 1 in the table). A row turns red while its counts differ. \n
4) Check your answer with 'Verificar'. \n
5) Earn points: solving without the hint and without revealing the solution pays 10, 20 or 30 points \n
depending on the difficulty. The score board counts equations solved without help per level. \n
6) Next challenge: 'Próxima' loads a new equation; with auto-advance enabled the next equation is loaded \n
right after a correct answer. \n
7) History: the last 30 equations are recorded as solved, solved with hint or revealed. \n
";
